use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/user/:id", get(handlers::dashboard))
        .route("/api/user/:id", get(handlers::get_main_data))
        .route("/api/user/:id/activity", get(handlers::get_activity))
        .route("/api/user/:id/activity/chart", get(handlers::get_activity_chart))
        .route("/api/user/:id/average-sessions", get(handlers::get_average_sessions))
        .route("/api/user/:id/performance", get(handlers::get_performance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
