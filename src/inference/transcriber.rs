//! Speech recognition client.

use std::path::Path;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{model_url, InferenceConfig, InferenceError};

/// Returned when the pipeline answers without a text field.
pub const NO_TRANSCRIPT_SENTINEL: &str = "Could not transcribe audio.";

/// Transcription client for a pretrained ASR model.
pub struct Transcriber {
    config: InferenceConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
}

impl Transcriber {
    /// Create a new transcriber with the given configuration.
    pub fn new(config: InferenceConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Transcribe the audio file at `path`.
    ///
    /// A response without a text field yields a fixed sentinel. Transport
    /// and API failures are returned as errors for the caller to recover.
    pub async fn transcribe(&self, path: &Path) -> Result<String, InferenceError> {
        let bytes = tokio::fs::read(path).await?;
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        debug!(
            audio_bytes = bytes.len(),
            %content_type,
            "requesting transcription"
        );

        let url = model_url(&self.config.endpoint, &self.config.asr_model);
        let mut req = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes);
        if let Some(token) = &self.config.api_token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Api(format!("HTTP {}: {}", status, body)));
        }

        let result: TranscriptionResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))?;

        Ok(result
            .text
            .unwrap_or_else(|| NO_TRANSCRIPT_SENTINEL.to_string()))
    }
}
