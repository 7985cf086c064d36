//! Top-k selection and context assembly.

use serde::Serialize;

use crate::score::ScoredChunk;

/// The retrieval contract returned to the caller: concatenated context
/// plus the distinct source identifiers that produced it. `context` is
/// empty exactly when `sources` is empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetrievalResult {
    pub context: String,
    pub sources: Vec<String>,
}

impl RetrievalResult {
    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
    }
}

/// Select the `top_k` best chunks and assemble the context block.
///
/// The sort is stable and descending by score: equal scores keep their
/// chunk discovery order (document order, then line order), which makes
/// retrieval results reproducible. Selected texts are joined with a
/// blank line; sources are deduplicated in selection order.
pub fn assemble(mut scored: Vec<ScoredChunk>, top_k: usize) -> RetrievalResult {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_k);

    let context = scored
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut sources: Vec<String> = Vec::new();
    for chunk in &scored {
        if !sources.iter().any(|s| s == &chunk.source) {
            sources.push(chunk.source.clone());
        }
    }

    RetrievalResult { context, sources }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: u32, source: &str, text: &str) -> ScoredChunk {
        ScoredChunk {
            score,
            source: source.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_top_k_by_descending_score() {
        let result = assemble(
            vec![
                scored(1, "a.md", "low"),
                scored(5, "b.md", "high"),
                scored(3, "c.md", "mid"),
            ],
            2,
        );
        assert_eq!(result.context, "high\n\nmid");
        assert_eq!(result.sources, vec!["b.md", "c.md"]);
    }

    #[test]
    fn test_equal_scores_keep_discovery_order() {
        let result = assemble(
            vec![
                scored(2, "a.md", "first"),
                scored(2, "b.md", "second"),
                scored(2, "c.md", "third"),
            ],
            3,
        );
        assert_eq!(result.context, "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_sources_are_deduplicated() {
        let result = assemble(
            vec![
                scored(4, "a.md", "one"),
                scored(3, "a.md", "two"),
                scored(2, "b.md", "three"),
            ],
            3,
        );
        assert_eq!(result.sources, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = assemble(vec![], 3);
        assert!(result.context.is_empty());
        assert!(result.sources.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_context_empty_iff_sources_empty() {
        let empty = assemble(vec![], 3);
        assert_eq!(empty.context.is_empty(), empty.sources.is_empty());
        let full = assemble(vec![scored(1, "a.md", "text")], 3);
        assert_eq!(full.context.is_empty(), full.sources.is_empty());
        assert!(!full.is_empty());
    }
}
