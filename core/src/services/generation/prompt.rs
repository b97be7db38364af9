//! Prompt classification and instruction shaping.
//!
//! Small instruct models ramble without explicit framing, so each
//! prompt class gets its own instruction wrapper before it is sent to
//! the inference API.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches prompts that are a bare arithmetic expression
static MATH_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[0-9+\-*/%^().\s]+\s*$").unwrap_or_else(|e| panic!("math regex: {e}"))
});

/// Matches prompts asking for code to be written
static CODE_REQUEST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bwrite\b[\s\S]*\b(code|function|program|script)\b")
        .unwrap_or_else(|e| panic!("code regex: {e}"))
});

/// Broad category of an incoming prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Bare arithmetic, answer with just the result
    Math,
    /// Code requested, answer with code only
    Code,
    /// Everything else
    General,
}

/// Classifies a raw user prompt
pub fn classify(prompt: &str) -> PromptKind {
    let trimmed = prompt.trim();
    if !trimmed.is_empty()
        && trimmed.chars().any(|c| c.is_ascii_digit())
        && MATH_ONLY.is_match(trimmed)
    {
        PromptKind::Math
    } else if CODE_REQUEST.is_match(trimmed) {
        PromptKind::Code
    } else {
        PromptKind::General
    }
}

/// Wraps the user prompt in the instruction framing for its class
pub fn build_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();
    match classify(trimmed) {
        PromptKind::Math => format!("Calculate: {trimmed}\nGive only the numeric result."),
        PromptKind::Code => {
            format!("{trimmed}\nRespond with the code only, no explanation.")
        }
        PromptKind::General => format!("Answer briefly: {trimmed}"),
    }
}
