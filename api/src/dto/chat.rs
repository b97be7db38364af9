//! Chat generation DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Generation request
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    /// Free-text topic or question
    #[validate(length(min = 1, max = 4000))]
    pub topic: String,
}

/// Generated answer
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
