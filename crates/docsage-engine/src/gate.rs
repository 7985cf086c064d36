//! Post-hoc answer gate — decides whether citations survive.

/// Literal phrases the model uses to flag an unsupported answer.
static NO_ANSWER_PATTERNS: &[&str] = &[
    "not mentioned",
    "not contain",
    "don't know",
    "do not have enough information",
];

/// True when the answer stands on the supplied context. When the model
/// itself flags the answer as unsupported, citing sources would be
/// misleading and the caller must drop them.
pub fn answer_is_grounded(answer: &str) -> bool {
    let lowered = answer.to_lowercase();
    !NO_ANSWER_PATTERNS.iter().any(|p| lowered.contains(p))
}
