//! Text generation: prompt shaping, inference client seam, and
//! response cleanup

mod postprocess;
mod prompt;
mod service;

pub use prompt::{build_prompt, classify, PromptKind};
pub use service::{GenerationParams, GenerationService, InferenceClient};
