use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route("/api/habits/stats", get(handlers::get_fleet_stats))
        .route(
            "/api/habits/:habit_id",
            get(handlers::get_habit)
                .put(handlers::update_habit)
                .delete(handlers::delete_habit),
        )
        .route(
            "/api/habits/:habit_id/completions",
            get(handlers::list_completions).post(handlers::toggle_completion),
        )
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/badges", get(handlers::get_badges))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
