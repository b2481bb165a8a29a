//! HTTP route handlers and router configuration

mod assets;
mod health;
mod index;
mod member;
mod search;

use crate::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use search::{SearchResponse, criteria_from_query};

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/member/:id", get(member::member))
        .route("/api/search", get(search::search))
        .route("/static/js/main.js", get(assets::main_js))
        .route("/healthz", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
