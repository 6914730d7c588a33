use crate::adapter::{ChartAdapter, LoadState, PLACEHOLDER};
use crate::charts::{activity::ActivityChart, average_sessions, key_data, performance, score};
use crate::models::{UserActivity, UserAverageSessions, UserId, UserMainData, UserPerformance};
use askama::Template;

const LOAD_ERROR: &str = "Les données n'ont pas pu être chargées.";

/// Dashboard body. Header, sidebar and the content slot come from
/// `layout.html`, which this template extends.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: String,
    pub profile_loaded: bool,
    pub profile_slot: String,
    pub first_name: String,
    pub key_cards: Vec<key_data::KeyCard>,
    pub activity: String,
    pub average_sessions: String,
    pub performance: String,
    pub score: String,
}

/// The adapters one dashboard page is built from.
pub struct DashboardAdapters {
    pub main: ChartAdapter<UserMainData>,
    pub activity: ChartAdapter<UserActivity>,
    pub average_sessions: ChartAdapter<UserAverageSessions>,
    pub performance: ChartAdapter<UserPerformance>,
}

impl Default for DashboardAdapters {
    fn default() -> Self {
        Self {
            main: ChartAdapter::new(),
            activity: ChartAdapter::new(),
            average_sessions: ChartAdapter::new(),
            performance: ChartAdapter::new(),
        }
    }
}

/// Markup for one widget: its chart once loaded, otherwise the placeholder
/// or the error notice.
pub fn chart_slot<T>(adapter: &ChartAdapter<T>, render: impl FnOnce(&T) -> String) -> String {
    match adapter.state() {
        LoadState::Pending => format!(r#"<div class="placeholder">{PLACEHOLDER}</div>"#),
        LoadState::Failed(_) => format!(r#"<div class="chart-error" role="alert">{LOAD_ERROR}</div>"#),
        LoadState::Loaded(record) => render(record),
    }
}

impl DashboardPage {
    pub fn build(user_id: UserId, adapters: &DashboardAdapters) -> Self {
        let (profile_loaded, first_name, key_cards) = match adapters.main.state() {
            LoadState::Loaded(main) => (
                true,
                main.user_infos.first_name.clone(),
                key_data::key_cards(&main.key_data),
            ),
            LoadState::Pending | LoadState::Failed(_) => (false, String::new(), Vec::new()),
        };

        Self {
            title: format!("SportSee - utilisateur {user_id}"),
            profile_loaded,
            profile_slot: chart_slot(&adapters.main, |_| String::new()),
            first_name,
            key_cards,
            activity: chart_slot(&adapters.activity, |record| {
                ActivityChart::from_record(record).render_svg()
            }),
            average_sessions: chart_slot(&adapters.average_sessions, average_sessions::render_svg),
            performance: chart_slot(&adapters.performance, performance::render_svg),
            score: chart_slot(&adapters.main, |main| score::render_svg(main.today_score)),
        }
    }
}

pub fn render_dashboard(user_id: UserId, adapters: &DashboardAdapters) -> Result<String, askama::Error> {
    DashboardPage::build(user_id, adapters).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivitySession, KeyData, UserInfos};

    fn loaded<T>(record: T) -> ChartAdapter<T> {
        let mut adapter = ChartAdapter::new();
        let ticket = adapter.set_user_id(12).unwrap();
        adapter.resolve(ticket, Ok(Some(record)));
        adapter
    }

    fn main_data(first_name: &str) -> UserMainData {
        UserMainData {
            id: 12,
            user_infos: UserInfos {
                first_name: first_name.to_string(),
                last_name: "Dovineau".to_string(),
                age: 31,
            },
            today_score: 0.12,
            key_data: KeyData {
                calorie_count: 1930,
                protein_count: 155,
                carbohydrate_count: 290,
                lipid_count: 50,
            },
        }
    }

    #[test]
    fn pending_page_shows_only_placeholders() {
        let html = render_dashboard(99, &DashboardAdapters::default()).unwrap();

        assert!(html.contains("<header"));
        assert!(html.contains(r#"class="sidebar""#));
        assert!(html.contains(PLACEHOLDER));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("Bonjour"));
    }

    #[test]
    fn loaded_page_renders_charts_inside_layout() {
        let adapters = DashboardAdapters {
            main: loaded(main_data("Karl")),
            activity: loaded(UserActivity {
                user_id: 12,
                sessions: vec![ActivitySession {
                    day: "2020-07-01".to_string(),
                    kilogram: 80.0,
                    calories: 240.0,
                }],
            }),
            ..DashboardAdapters::default()
        };
        let html = render_dashboard(12, &adapters).unwrap();

        assert!(html.contains("Bonjour"));
        assert!(html.contains("Karl"));
        assert!(html.contains("1,930kCal"));
        assert!(html.contains("Activité quotidienne"));
        assert!(html.contains(">12%<"));
        assert!(html.find("<header").unwrap() < html.find("Activité quotidienne").unwrap());
        // sessions and performance are still pending
        assert!(html.contains(PLACEHOLDER));
    }

    #[test]
    fn first_name_is_escaped() {
        let adapters = DashboardAdapters {
            main: loaded(main_data("<script>")),
            ..DashboardAdapters::default()
        };
        let html = render_dashboard(12, &adapters).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn failed_slot_is_not_the_placeholder() {
        let mut adapter = ChartAdapter::<UserActivity>::new();
        let ticket = adapter.set_user_id(12).unwrap();
        adapter.resolve(
            ticket,
            Err(crate::errors::DataError::Malformed {
                category: crate::data_access::Category::Activity,
                user_id: 12,
                reason: "bad".to_string(),
            }),
        );

        let slot = chart_slot(&adapter, |_| String::from("chart"));
        assert!(slot.contains(LOAD_ERROR));
        assert!(!slot.contains(PLACEHOLDER));
    }
}
