//! Router configuration for the web server.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Upload size ceiling; audio files dominate.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index_page).post(handlers::summarize_text),
        )
        .route("/voice", post(handlers::voice_upload))
        .route("/document", post(handlers::document_upload))
        .route("/feedback", post(handlers::submit_feedback))
        .route("/static/style.css", get(handlers::serve_css))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
