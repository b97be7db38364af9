//! Hugging Face Inference API client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pf_core::errors::{DomainError, DomainResult};
use pf_core::services::generation::{GenerationParams, InferenceClient};
use pf_shared::config::InferenceConfig;

const SERVICE_NAME: &str = "huggingface";

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: RequestParameters,
}

#[derive(Serialize)]
struct RequestParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    do_sample: bool,
    /// Ask the API not to echo the prompt; older deployments ignore
    /// this, which the post-processing layer handles.
    return_full_text: bool,
}

#[derive(Deserialize)]
struct InferenceResponse {
    generated_text: String,
}

/// Client for the hosted text-generation endpoint
pub struct HuggingFaceClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::Internal {
                message: format!("failed to build http client: {e}"),
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> DomainResult<String> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: RequestParameters {
                max_new_tokens: params.max_new_tokens,
                temperature: params.temperature,
                top_p: params.top_p,
                do_sample: true,
                return_full_text: false,
            },
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| external_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body.chars().take(200).collect::<String>(),
                "inference api returned error");
            return Err(external_error(format!("status {status}")));
        }

        let mut completions: Vec<InferenceResponse> = response
            .json()
            .await
            .map_err(|e| external_error(format!("invalid response body: {e}")))?;

        if completions.is_empty() {
            return Err(external_error("empty completion list".to_string()));
        }
        Ok(completions.swap_remove(0).generated_text)
    }
}

fn external_error(message: String) -> DomainError {
    DomainError::ExternalService {
        service: SERVICE_NAME.to_string(),
        message,
    }
}
