pub mod health;

use axum::{routing::get, Router};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendations",
            get(handlers::handle_get_recommendations),
        )
        .route(
            "/api/v1/recommendations/similar/:job_id",
            get(handlers::handle_similar_jobs),
        )
        .with_state(state)
}
