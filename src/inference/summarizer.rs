//! Abstractive summarization client.
//!
//! Wraps a pretrained seq2seq summarization model behind a word-budget
//! interface: the caller asks for at most N words, we translate that into
//! approximate token-length generation bounds, and the decoded summary is
//! hard-capped by a whitespace word trim afterwards.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{model_url, InferenceConfig, InferenceError};

/// Returned for empty input without invoking the model.
pub const NO_TEXT_SENTINEL: &str = "No text found to summarize.";

/// Summarization client for a pretrained seq2seq model.
pub struct Summarizer {
    config: InferenceConfig,
    client: Client,
}

/// Generation parameters sent alongside the input text.
#[derive(Debug, Serialize)]
struct GenerationParameters {
    min_length: u32,
    max_length: u32,
    num_beams: u32,
    early_stopping: bool,
    no_repeat_ngram_size: u32,
    truncation: bool,
}

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct SummarizationResponse {
    summary_text: String,
}

impl Summarizer {
    /// Create a new summarizer with the given configuration.
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

    /// Summarize text to approximately `word_limit` words.
    ///
    /// Empty or whitespace-only input short-circuits to a fixed sentinel
    /// without touching the model. Model failures propagate to the caller.
    pub async fn summarize(
        &self,
        text: &str,
        word_limit: usize,
    ) -> Result<String, InferenceError> {
        if text.trim().is_empty() {
            return Ok(NO_TEXT_SENTINEL.to_string());
        }

        let (min_length, max_length) = generation_bounds(word_limit);
        let truncated = self.truncate_input(text);

        debug!(
            word_limit,
            min_length,
            max_length,
            input_chars = truncated.len(),
            "requesting summary"
        );

        let request = SummarizationRequest {
            inputs: truncated,
            parameters: GenerationParameters {
                min_length,
                max_length,
                num_beams: 4,
                early_stopping: true,
                no_repeat_ngram_size: 3,
                truncation: true,
            },
        };

        let url = model_url(&self.config.endpoint, &self.config.summarization_model);
        let mut req = self.client.post(&url).json(&request);
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

        let outputs: Vec<SummarizationResponse> = resp
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))?;

        let summary = outputs
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::Parse("empty summarization response".to_string()))?
            .summary_text;

        Ok(trim_to_word_limit(&summary, word_limit))
    }

    /// Truncate input to the configured character budget (UTF-8 safe).
    fn truncate_input<'a>(&self, text: &'a str) -> &'a str {
        if text.len() <= self.config.max_input_chars {
            return text;
        }
        let mut end = self.config.max_input_chars;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[..end]
    }
}

/// Convert a word budget into approximate token-length generation bounds.
///
/// Roughly 1.3 tokens per word for the ceiling; the floor is 0.8x with a
/// minimum of 20 so short budgets still produce a sentence.
fn generation_bounds(word_limit: usize) -> (u32, u32) {
    let max_length = (word_limit as f64 * 1.3).round() as u32;
    let min_length = ((word_limit as f64 * 0.8).round() as u32).max(20);
    (min_length, max_length)
}

/// Trim a summary to at most `word_limit` whitespace-delimited words.
///
/// The generation bounds above are approximate; this is the authoritative
/// cap. Summaries already within the limit are returned unchanged.
pub fn trim_to_word_limit(summary: &str, word_limit: usize) -> String {
    let words: Vec<&str> = summary.split_whitespace().collect();
    if words.len() > word_limit {
        words[..word_limit].join(" ")
    } else {
        summary.to_string()
    }
}
