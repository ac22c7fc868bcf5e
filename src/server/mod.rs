//! Web server for summarization and transcription.
//!
//! Serves a single shared page with four entry points: pasted-text
//! summarization, audio transcription, document summarization, and
//! feedback submission. Model services are constructed once and injected
//! through [`AppState`]; the feedback list is the only shared mutable
//! state.

mod assets;
mod error;
mod handlers;
mod routes;
mod template_structs;

pub use error::AppError;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::feedback::FeedbackStore;
use crate::inference::{InferenceConfig, Summarizer, Transcriber};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
    pub transcriber: Arc<Transcriber>,
    pub extractor: TextExtractor,
    pub feedback: FeedbackStore,
}

impl AppState {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            summarizer: Arc::new(Summarizer::new(config.clone())),
            transcriber: Arc::new(Transcriber::new(config)),
            extractor: TextExtractor::new(),
            feedback: FeedbackStore::new(),
        }
    }
}

/// Start the web server.
pub async fn serve(config: InferenceConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
