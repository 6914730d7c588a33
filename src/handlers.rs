use crate::charts::activity::ActivityChart;
use crate::errors::AppError;
use crate::models::{UserActivity, UserAverageSessions, UserId, UserMainData, UserPerformance};
use crate::state::AppState;
use crate::ui::{render_dashboard, DashboardAdapters};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("/user/{}", state.default_user_id))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Html<String>, AppError> {
    let data = &state.data;
    let mut adapters = DashboardAdapters::default();

    tokio::join!(
        adapters.main.load_with(user_id, |id| data.fetch_user_main_data(id)),
        adapters.activity.load_with(user_id, |id| data.fetch_user_activity(id)),
        adapters
            .average_sessions
            .load_with(user_id, |id| data.fetch_user_average_sessions(id)),
        adapters
            .performance
            .load_with(user_id, |id| data.fetch_user_performance(id)),
    );

    info!(user_id, "rendering dashboard");
    let html = render_dashboard(user_id, &adapters).map_err(AppError::internal)?;
    Ok(Html(html))
}

pub async fn get_main_data(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserMainData>, AppError> {
    let record = state.data.fetch_user_main_data(user_id).await?;
    found(record, user_id).map(Json)
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserActivity>, AppError> {
    let record = state.data.fetch_user_activity(user_id).await?;
    found(record, user_id).map(Json)
}

pub async fn get_activity_chart(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ActivityChart>, AppError> {
    let record = state.data.fetch_user_activity(user_id).await?;
    let record = found(record, user_id)?;
    Ok(Json(ActivityChart::from_record(&record)))
}

pub async fn get_average_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserAverageSessions>, AppError> {
    let record = state.data.fetch_user_average_sessions(user_id).await?;
    found(record, user_id).map(Json)
}

pub async fn get_performance(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserPerformance>, AppError> {
    let record = state.data.fetch_user_performance(user_id).await?;
    found(record, user_id).map(Json)
}

fn found<T>(record: Option<T>, user_id: UserId) -> Result<T, AppError> {
    record.ok_or_else(|| AppError::not_found(format!("no data for user {user_id}")))
}
