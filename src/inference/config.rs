//! Inference endpoint configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the model inference clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer token for hosted inference APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Sequence-to-sequence summarization model.
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,
    /// Automatic speech recognition model.
    #[serde(default = "default_asr_model")]
    pub asr_model: String,
    /// Request timeout in seconds. Model inference is slow; be generous.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum characters of input text sent to the summarization model.
    /// Approximates the model's 1024-token input window.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_summarization_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_asr_model() -> String {
    "openai/whisper-small".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_max_input_chars() -> usize {
    4096
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token: None,
            summarization_model: default_summarization_model(),
            asr_model: default_asr_model(),
            timeout_secs: default_timeout_secs(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl InferenceConfig {
    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `INFERENCE_ENDPOINT`: base URL of the inference service
    /// - `INFERENCE_API_TOKEN`: bearer token
    /// - `SUMMARIZATION_MODEL`: summarization model name
    /// - `ASR_MODEL`: speech recognition model name
    /// - `INFERENCE_TIMEOUT_SECS`: request timeout
    /// - `INFERENCE_MAX_INPUT_CHARS`: input truncation budget
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("INFERENCE_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("INFERENCE_API_TOKEN") {
            self.api_token = Some(val);
        }
        if let Ok(val) = std::env::var("SUMMARIZATION_MODEL") {
            self.summarization_model = val;
        }
        if let Ok(val) = std::env::var("ASR_MODEL") {
            self.asr_model = val;
        }
        if let Ok(val) = std::env::var("INFERENCE_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.timeout_secs = n;
            }
        }
        if let Ok(val) = std::env::var("INFERENCE_MAX_INPUT_CHARS") {
            if let Ok(n) = val.parse() {
                self.max_input_chars = n;
            }
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}
