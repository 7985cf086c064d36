//! Term-overlap relevance scoring.

use crate::chunker::Chunk;

/// Keywords too broad to indicate genuine topical relevance. They never
/// contribute to the text-overlap score; the filename bonus still counts
/// them.
static GENERIC_TERMS: &[&str] = &["aws", "services", "cloud", "service"];

/// Flat bonus applied once when any keyword appears in the source name.
const FILENAME_BONUS: u32 = 3;

fn is_generic(token: &str) -> bool {
    GENERIC_TERMS.contains(&token)
}

/// A chunk that met the minimum-relevance threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChunk {
    pub score: u32,
    pub text: String,
    pub source: String,
}

/// Score a single chunk against the keyword sequence.
///
/// Each entry contributes one point when it appears as a substring of the
/// lowercased chunk text and is not a generic term. The sequence is
/// iterated raw, so duplicate query keywords weight matching chunks more
/// heavily. Any keyword found in the lowercased source name adds
/// [`FILENAME_BONUS`], once per chunk.
pub fn score_chunk(keywords: &[String], chunk: &Chunk) -> u32 {
    let text = chunk.text.to_lowercase();
    let mut score = keywords
        .iter()
        .filter(|kw| !is_generic(kw.as_str()) && text.contains(kw.as_str()))
        .count() as u32;

    let filename = chunk.source.to_lowercase();
    if keywords.iter().any(|kw| filename.contains(kw.as_str())) {
        score += FILENAME_BONUS;
    }

    score
}

/// Score every chunk and keep those at or above `min_score`. Chunks
/// below the threshold are discarded entirely, not ranked low.
pub fn score_chunks(keywords: &[String], chunks: &[Chunk], min_score: u32) -> Vec<ScoredChunk> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let score = score_chunk(keywords, chunk);
            (score >= min_score).then(|| ScoredChunk {
                score,
                text: chunk.text.clone(),
                source: chunk.source.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn chunk(source: &str, text: &str) -> Chunk {
        Chunk {
            source: source.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let c = chunk("doc1", "Lambda runs code in response to events.");
        assert_eq!(score_chunk(&kws(&["lambda"]), &c), 1);
        assert_eq!(score_chunk(&kws(&["lambda", "events"]), &c), 2);
    }

    #[test]
    fn test_generic_terms_do_not_score_text() {
        let c = chunk("doc1", "AWS offers many cloud services worldwide.");
        assert_eq!(score_chunk(&kws(&["aws", "cloud", "services", "service"]), &c), 0);
    }

    #[test]
    fn test_duplicate_keywords_multiply_contribution() {
        let c = chunk("doc1", "Queues decouple producers from consumers.");
        assert_eq!(score_chunk(&kws(&["queues"]), &c), 1);
        assert_eq!(score_chunk(&kws(&["queues", "queues", "queues"]), &c), 3);
    }

    #[test]
    fn test_filename_bonus_is_flat_and_counts_generic_terms() {
        let c = chunk("aws-lambda.md", "Functions scale automatically with load.");
        // both "aws" and "lambda" hit the filename, bonus applied once
        assert_eq!(score_chunk(&kws(&["aws", "lambda"]), &c), 3);
        // a text match stacks on top of the bonus
        assert_eq!(score_chunk(&kws(&["lambda", "functions"]), &c), 4);
    }

    #[test]
    fn test_monotonicity_adding_keywords_never_lowers_score() {
        let c = chunk("doc1", "Serverless compute bills per invocation.");
        let base = kws(&["compute"]);
        let mut extended = base.clone();
        extended.push("invocation".into());
        assert!(score_chunk(&extended, &c) >= score_chunk(&base, &c));
        // a non-matching addition also never lowers the score
        let mut noise = base.clone();
        noise.push("zebra".into());
        assert!(score_chunk(&noise, &c) >= score_chunk(&base, &c));
    }

    #[test]
    fn test_threshold_discards_zero_scores() {
        let chunks = vec![
            chunk("doc1", "Lambda executes functions on demand."),
            chunk("doc2", "Completely unrelated gardening advice here."),
        ];
        let retained = score_chunks(&kws(&["lambda"]), &chunks, 1);
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].source, "doc1");
        assert!(retained.iter().all(|s| s.score >= 1));
    }
}
