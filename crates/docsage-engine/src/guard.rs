//! Prompt screening — ordered terminal guards ahead of retrieval.
//!
//! Each guard either produces a final outcome or passes the prompt
//! through, so every branch is testable on its own.

use docsage_core::config::LimitConfig;
use docsage_core::error::{DocSageError, Result};

/// Prefixes that short-circuit with a canned reply: no retrieval, no
/// model call.
static GREETING_PREFIXES: &[&str] = &["hi", "hello", "hey", "what's up", "how are you"];

/// Canned reply for greeting prompts.
pub const GREETING_REPLY: &str = "Hello! Ask me a technical question.";

/// Outcome of prompt screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Trivial greeting — answer with [`GREETING_REPLY`].
    Greeting,
    /// A real question, trimmed and ready for retrieval.
    Query(String),
}

/// Run the guards in order: greeting short-circuit, empty prompt,
/// over-long prompt. Validation failures surface as
/// [`DocSageError::InvalidPrompt`].
pub fn screen_prompt(prompt: &str, limits: &LimitConfig) -> Result<Screen> {
    let trimmed = prompt.trim();
    let normalized = trimmed.to_lowercase();

    if GREETING_PREFIXES.iter().any(|g| normalized.starts_with(g)) {
        return Ok(Screen::Greeting);
    }
    if trimmed.is_empty() {
        return Err(DocSageError::InvalidPrompt("Prompt is required.".into()));
    }
    if trimmed.chars().count() > limits.max_prompt_chars {
        return Err(DocSageError::InvalidPrompt("Prompt is too long.".into()));
    }

    Ok(Screen::Query(trimmed.to_string()))
}

/// Dynamic generation budget: short prompts get the smaller completion.
pub fn max_tokens_for(prompt: &str, limits: &LimitConfig) -> u32 {
    if prompt.chars().count() < limits.short_prompt_chars {
        limits.short_max_tokens
    } else {
        limits.long_max_tokens
    }
}
