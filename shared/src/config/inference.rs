//! Inference API configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Default Hugging Face text-generation model endpoint
const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3";

/// Configuration for the third-party text-generation API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InferenceConfig {
    /// Model endpoint URL
    pub api_url: String,

    /// Bearer token for the inference API
    pub api_key: String,

    /// Maximum tokens generated per request
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl InferenceConfig {
    /// Load inference configuration from the environment
    ///
    /// `HUGGINGFACE_API_KEY` is required; the endpoint and sampling
    /// parameters fall back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let api_key = std::env::var("HUGGINGFACE_API_KEY")
            .map_err(|_| "HUGGINGFACE_API_KEY not set".to_string())?;

        Ok(Self {
            api_url: env_or("INFERENCE_API_URL", DEFAULT_API_URL),
            api_key,
            max_new_tokens: env_parse_or("INFERENCE_MAX_NEW_TOKENS", default_max_new_tokens()),
            temperature: env_parse_or("INFERENCE_TEMPERATURE", default_temperature()),
            top_p: env_parse_or("INFERENCE_TOP_P", default_top_p()),
            request_timeout_secs: env_parse_or("INFERENCE_TIMEOUT_SECS", default_request_timeout()),
        })
    }
}

fn default_max_new_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.5
}

fn default_top_p() -> f32 {
    0.95
}

fn default_request_timeout() -> u64 {
    30
}
