//! Clients for pretrained model inference.
//!
//! Summarization and speech recognition are delegated to a Hugging
//! Face-style inference endpoint; this module only does request/response
//! plumbing. Both services are constructed once at startup and injected
//! into request handlers.

mod config;
mod summarizer;
mod transcriber;

pub use config::InferenceConfig;
pub use summarizer::{trim_to_word_limit, Summarizer, NO_TEXT_SENTINEL};
pub use transcriber::{Transcriber, NO_TRANSCRIPT_SENTINEL};

use thiserror::Error;

/// Errors that can occur when calling a model endpoint.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to reach the inference service.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-success status.
    #[error("API error: {0}")]
    Api(String),

    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Could not read the local input file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the per-model inference URL.
fn model_url(endpoint: &str, model: &str) -> String {
    format!("{}/models/{}", endpoint.trim_end_matches('/'), model)
}
