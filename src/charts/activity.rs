//! Daily activity bar chart: weight and burned calories per day.
//!
//! Weight is drawn against a visible right-hand axis, calories against a
//! hidden left-hand one. Hovering a day shows a tooltip with both values.

use super::{format_value, svg_text, Axis};
use crate::models::{ActivitySession, UserActivity};
use chrono::NaiveDate;
use serde::Serialize;

pub const TITLE: &str = "Activité quotidienne";
pub const WEIGHT_LEGEND: &str = "Poids (kg)";
pub const CALORIES_LEGEND: &str = "Calories brûlées (kcal)";

const WEIGHT_COLOR: &str = "#282D30";
const CALORIES_COLOR: &str = "#E60000";

const WIDTH: f64 = 835.0;
const HEIGHT: f64 = 320.0;
const PLOT_LEFT: f64 = 40.0;
const PLOT_RIGHT: f64 = 770.0;
const PLOT_TOP: f64 = 100.0;
const PLOT_BOTTOM: f64 = 270.0;
const BAR_WIDTH: f64 = 7.0;

/// One session as the chart shows it. `day` keeps only the last character of
/// the source label; the numbers are untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedSession {
    pub day: String,
    pub kilogram: f64,
    pub calories: f64,
}

pub fn day_label(day: &str) -> String {
    day.chars().last().map(String::from).unwrap_or_default()
}

pub fn format_session(session: &ActivitySession) -> FormattedSession {
    FormattedSession {
        day: day_label(&session.day),
        kilogram: session.kilogram,
        calories: session.calories,
    }
}

pub fn format_sessions(sessions: &[ActivitySession]) -> Vec<FormattedSession> {
    sessions.iter().map(format_session).collect()
}

/// Hover content for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityTooltip {
    pub weight_kg: f64,
    pub calories_kcal: f64,
}

impl ActivityTooltip {
    pub fn for_session(session: &FormattedSession) -> Self {
        Self {
            weight_kg: session.kilogram,
            calories_kcal: session.calories,
        }
    }

    /// Weight first, then calories.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("{} kg", format_value(self.weight_kg)),
            format!("{} kcal", format_value(self.calories_kcal)),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityPoint {
    #[serde(flatten)]
    pub session: FormattedSession,
    /// Full session date, when the source label is an ISO date.
    pub date: Option<NaiveDate>,
    pub tooltip: [String; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityChart {
    pub title: &'static str,
    pub points: Vec<ActivityPoint>,
    pub weight_axis: Axis,
    pub calories_axis: Axis,
}

impl ActivityChart {
    pub fn from_record(record: &UserActivity) -> Self {
        let sessions = format_sessions(&record.sessions);
        let weight_axis = Axis::fit(sessions.iter().map(|s| s.kilogram), 1.0, 1.0);
        let calories_axis = Axis::from_zero(sessions.iter().map(|s| s.calories), 0.1);
        let points = sessions
            .into_iter()
            .zip(&record.sessions)
            .map(|(session, source)| ActivityPoint {
                tooltip: ActivityTooltip::for_session(&session).lines(),
                date: source.date(),
                session,
            })
            .collect();

        Self {
            title: TITLE,
            points,
            weight_axis,
            calories_axis,
        }
    }

    pub fn render_svg(&self) -> String {
        let plot_height = PLOT_BOTTOM - PLOT_TOP;
        let mut svg = String::new();

        svg.push_str(&format!(
            r##"<svg class="chart chart-activity" viewBox="0 0 {WIDTH} {HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{TITLE}">
<style>.bar-group .tooltip,.bar-group .highlight{{visibility:hidden}}.bar-group:hover .tooltip,.bar-group:hover .highlight{{visibility:visible}}</style>
<rect width="{WIDTH}" height="{HEIGHT}" rx="5" fill="#FBFBFB"/>
<text x="32" y="40" font-size="15" font-weight="600" fill="#20253A">{TITLE}</text>
<circle cx="470" cy="36" r="4" fill="{WEIGHT_COLOR}"/><text x="482" y="40" font-size="14" fill="#74798C">{WEIGHT_LEGEND}</text>
<circle cx="600" cy="36" r="4" fill="{CALORIES_COLOR}"/><text x="612" y="40" font-size="14" fill="#74798C">{CALORIES_LEGEND}</text>
"##
        ));

        for tick in self.weight_axis.ticks(3) {
            let y = PLOT_BOTTOM - self.weight_axis.scale(tick, plot_height);
            svg.push_str(&format!(
                r##"<line x1="{PLOT_LEFT}" y1="{y:.1}" x2="{PLOT_RIGHT}" y2="{y:.1}" stroke="#DEDEDE" stroke-dasharray="2 2"/><text x="{x}" y="{ty:.1}" font-size="14" fill="#9B9EAC">{label}</text>
"##,
                x = PLOT_RIGHT + 20.0,
                ty = y + 5.0,
                label = format_value(tick),
            ));
        }
        svg.push_str(&format!(
            r##"<line x1="{PLOT_LEFT}" y1="{PLOT_BOTTOM}" x2="{PLOT_RIGHT}" y2="{PLOT_BOTTOM}" stroke="#DEDEDE"/>"##
        ));
        svg.push('\n');

        let band = if self.points.is_empty() {
            0.0
        } else {
            (PLOT_RIGHT - PLOT_LEFT) / self.points.len() as f64
        };

        for (index, point) in self.points.iter().enumerate() {
            let center = PLOT_LEFT + band * (index as f64 + 0.5);
            let weight_height = self.weight_axis.scale(point.session.kilogram, plot_height);
            let calories_height = self.calories_axis.scale(point.session.calories, plot_height);
            let tooltip_x = if center + 20.0 + 39.0 > WIDTH {
                center - 20.0 - 39.0
            } else {
                center + 20.0
            };

            let title = point
                .date
                .map(|date| format!("<title>{}</title>", date.format("%d/%m/%Y")))
                .unwrap_or_default();

            svg.push_str(&format!(
                r##"<g class="bar-group">{title}
<rect class="highlight" x="{hx:.1}" y="{PLOT_TOP}" width="56" height="{plot_height}" fill="#C4C4C4" opacity="0.5"/>
<rect x="{wx:.1}" y="{wy:.1}" width="{BAR_WIDTH}" height="{weight_height:.1}" rx="3" fill="{WEIGHT_COLOR}"/>
<rect x="{cx:.1}" y="{cy:.1}" width="{BAR_WIDTH}" height="{calories_height:.1}" rx="3" fill="{CALORIES_COLOR}"/>
<text x="{center:.1}" y="{ly}" font-size="14" fill="#9B9EAC" text-anchor="middle">{day}</text>
<g class="tooltip"><rect x="{tooltip_x:.1}" y="{PLOT_TOP}" width="39" height="63" fill="{CALORIES_COLOR}"/><text x="{tx:.1}" y="{t1}" font-size="7" fill="#FFFFFF" text-anchor="middle">{weight}</text><text x="{tx:.1}" y="{t2}" font-size="7" fill="#FFFFFF" text-anchor="middle">{calories}</text></g>
</g>
"##,
                hx = center - 28.0,
                wx = center - 4.0 - BAR_WIDTH,
                wy = PLOT_BOTTOM - weight_height,
                cx = center + 4.0,
                cy = PLOT_BOTTOM - calories_height,
                ly = PLOT_BOTTOM + 25.0,
                day = svg_text(&point.session.day),
                tx = tooltip_x + 19.5,
                t1 = PLOT_TOP + 22.0,
                t2 = PLOT_TOP + 47.0,
                weight = point.tooltip[0],
                calories = point.tooltip[1],
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: &str, kilogram: f64, calories: f64) -> ActivitySession {
        ActivitySession {
            day: day.to_string(),
            kilogram,
            calories,
        }
    }

    fn record() -> UserActivity {
        UserActivity {
            user_id: 12,
            sessions: vec![
                session("2020-07-01", 80.0, 240.0),
                session("2020-07-02", 79.0, 220.0),
            ],
        }
    }

    #[test]
    fn formatting_keeps_order_and_numbers() {
        let sessions = record().sessions;
        let formatted = format_sessions(&sessions);

        assert_eq!(formatted.len(), sessions.len());
        for (source, view) in sessions.iter().zip(&formatted) {
            assert_eq!(view.kilogram, source.kilogram);
            assert_eq!(view.calories, source.calories);
        }
        let days: Vec<_> = formatted.iter().map(|s| s.day.as_str()).collect();
        assert_eq!(days, ["1", "2"]);
    }

    #[test]
    fn day_label_is_last_character() {
        assert_eq!(day_label("2020-07-10"), "0");
        assert_eq!(day_label("lundi é"), "é");
        assert_eq!(day_label(""), "");
    }

    #[test]
    fn tooltip_shows_weight_then_calories() {
        let hovered = FormattedSession {
            day: "3".to_string(),
            kilogram: 68.0,
            calories: 250.0,
        };
        let tip = ActivityTooltip::for_session(&hovered);
        assert_eq!(tip.weight_kg, 68.0);
        assert_eq!(tip.calories_kcal, 250.0);
        assert_eq!(tip.lines(), ["68 kg".to_string(), "250 kcal".to_string()]);
    }

    #[test]
    fn points_carry_parsed_session_dates() {
        let mut record = record();
        record.sessions.push(session("mardi", 78.0, 300.0));
        let chart = ActivityChart::from_record(&record);

        assert_eq!(chart.points[0].date, NaiveDate::from_ymd_opt(2020, 7, 1));
        assert_eq!(chart.points[2].date, None);
        assert_eq!(chart.points[2].session.day, "i");

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["points"][1]["date"], "2020-07-02");
        assert!(json["points"][2]["date"].is_null());

        let svg = chart.render_svg();
        assert!(svg.contains("<title>01/07/2020</title>"));
        assert_eq!(svg.matches("<title>").count(), 2);
    }

    #[test]
    fn chart_carries_tooltips_per_point() {
        let chart = ActivityChart::from_record(&record());
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].tooltip[0], "80 kg");
        assert_eq!(chart.points[1].tooltip[1], "220 kcal");
        assert_eq!(chart.weight_axis, Axis { min: 78.0, max: 81.0 });
        assert_eq!(chart.calories_axis.min, 0.0);
    }

    #[test]
    fn svg_lists_days_in_order_with_tooltips() {
        let svg = ActivityChart::from_record(&record()).render_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains(WEIGHT_LEGEND));
        assert!(svg.contains(CALORIES_LEGEND));
        assert_eq!(svg.matches(r#"class="bar-group""#).count(), 2);

        let first = svg.find(">80 kg<").expect("first tooltip");
        let second = svg.find(">79 kg<").expect("second tooltip");
        assert!(first < second);
        assert!(svg.contains(">240 kcal<"));
    }

    #[test]
    fn empty_sessions_render_an_empty_frame() {
        let chart = ActivityChart::from_record(&UserActivity {
            user_id: 12,
            sessions: Vec::new(),
        });
        let svg = chart.render_svg();
        assert!(svg.contains(TITLE));
        assert!(!svg.contains("bar-group\""));
    }
}
