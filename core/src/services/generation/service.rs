//! Generation service orchestrating prompt shaping, inference, and
//! response cleanup

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{DomainResult, ValidationError};

use super::postprocess::clean_response;
use super::prompt::build_prompt;

/// Sampling parameters forwarded to the inference backend
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 200,
            temperature: 0.5,
            top_p: 0.95,
        }
    }
}

/// Seam to the hosted inference API
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends a fully framed prompt and returns the raw completion
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> DomainResult<String>;
}

/// Turns user prompts into cleaned answers via an `InferenceClient`
pub struct GenerationService {
    client: Arc<dyn InferenceClient>,
    params: GenerationParams,
}

impl GenerationService {
    pub fn new(client: Arc<dyn InferenceClient>, params: GenerationParams) -> Self {
        Self { client, params }
    }

    /// Generates an answer for a raw user prompt
    pub async fn generate_answer(&self, prompt: &str) -> DomainResult<String> {
        if prompt.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "prompt".to_string(),
            }
            .into());
        }

        let framed = build_prompt(prompt);
        let raw = self.client.generate(&framed, &self.params).await?;
        let cleaned = clean_response(&raw, &framed);

        tracing::debug!(
            prompt_chars = prompt.chars().count(),
            answer_chars = cleaned.chars().count(),
            "generated answer"
        );
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use tokio::sync::Mutex;

    /// Records the prompt it was called with and returns a canned reply
    struct StubClient {
        reply: String,
        seen: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl InferenceClient for StubClient {
        async fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> DomainResult<String> {
            self.seen.lock().await.push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_math_prompt_is_framed_and_cleaned() {
        let client = Arc::new(StubClient::new("Calculate: 2+2\nGive only the numeric result.\n4"));
        let service = GenerationService::new(client.clone(), GenerationParams::default());

        let answer = service.generate_answer("2+2").await.unwrap();
        assert_eq!(answer, "4");

        let seen = client.seen.lock().await;
        assert!(seen[0].starts_with("Calculate: 2+2"));
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let client = Arc::new(StubClient::new("anything"));
        let service = GenerationService::new(client, GenerationParams::default());

        let result = service.generate_answer("   ").await;
        assert!(matches!(result, Err(DomainError::ValidationErr(_))));
    }
}
