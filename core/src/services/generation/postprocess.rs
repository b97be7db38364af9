//! Cleanup of raw completions before they reach the client.
//!
//! Instruct models echo the prompt, wrap answers in code fences, and
//! open with filler ("Sure, here is..."). All of that is stripped so
//! the client sees only the answer body.

/// Lead-ins that carry no content when they open the first line
const PREAMBLES: &[&str] = &[
    "sure,",
    "sure!",
    "sure thing",
    "certainly,",
    "certainly!",
    "of course,",
    "of course!",
    "here is",
    "here's",
    "the answer is",
    "answer:",
    "okay,",
    "ok,",
];

/// Cleans a raw model completion.
///
/// `sent_prompt` is the full instruction-framed prompt that was sent
/// to the model, used to strip a leading echo.
pub fn clean_response(raw: &str, sent_prompt: &str) -> String {
    let mut text = raw.trim();

    // Some inference backends return the prompt followed by the
    // completion in one string.
    if let Some(rest) = text.strip_prefix(sent_prompt.trim()) {
        text = rest.trim_start();
    }

    let text = strip_code_fences(text);
    let text = strip_preamble(text);
    let text = strip_inline_preamble(text);
    text.trim().to_string()
}

/// Known answer lead-ins that may precede the answer on the same line
const INLINE_PREAMBLES: &[&str] = &[
    "here's the answer:",
    "here is the answer:",
    "the answer is:",
    "answer:",
];

fn strip_inline_preamble(text: &str) -> &str {
    let lowered = text.to_lowercase();
    for preamble in INLINE_PREAMBLES {
        // Matched prefixes are pure ASCII, so the byte offset is a
        // valid char boundary in the original text.
        if lowered.starts_with(preamble) {
            return text[preamble.len()..].trim_start();
        }
    }
    text
}

/// Removes a wrapping ``` fence pair, keeping the inner content
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop a language tag on the opening fence line
    match inner.split_once('\n') {
        Some((first_line, body)) if !first_line.trim().contains(' ') => body.trim_matches('\n'),
        _ => inner.trim_matches('\n'),
    }
}

/// Drops a first line that is pure filler
fn strip_preamble(text: &str) -> &str {
    let Some((first_line, rest)) = text.split_once('\n') else {
        return text;
    };
    let lowered = first_line.trim().to_lowercase();
    let is_filler = PREAMBLES
        .iter()
        .any(|p| lowered.starts_with(p) && (lowered.ends_with(':') || lowered.len() < 60));
    if is_filler && !rest.trim().is_empty() {
        rest.trim_start_matches('\n')
    } else {
        text
    }
}
