use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/queue", get(handlers::get_queue))
        .route("/api/history", get(handlers::get_history))
        .route("/api/promos", post(handlers::add_promo))
        .route("/api/promos/:id", delete(handlers::delete_promo))
        .route("/api/promos/:id/complete", post(handlers::complete_promo))
        .route("/api/promos/:id/priority", post(handlers::set_priority))
        .route("/api/goal", put(handlers::set_goal))
        .with_state(state)
}
