//! Keyword extraction with stop-word filtering.

/// Words too common in technical questions to carry topical signal.
/// Kept as one static set so tuning never touches extraction logic.
static STOP_WORDS: &[&str] = &[
    "what", "is", "how", "why", "explain", "tell", "me", "about", "does",
    "do", "of", "to", "in", "a", "an", "the",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract lowercase alphabetic tokens in input order, dropping
/// stop-words. Digits and punctuation separate tokens and are discarded.
/// Duplicates are preserved; an empty input yields an empty sequence.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            if !is_stop_word(&current) {
                keywords.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if !current.is_empty() && !is_stop_word(&current) {
        keywords.push(current);
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_lowercase_alphabetic() {
        let keywords = extract_keywords("What is AWS Lambda v2.0?");
        for kw in &keywords {
            assert!(kw.chars().all(|c| c.is_ascii_lowercase()), "bad token {kw}");
            assert!(!is_stop_word(kw));
        }
        assert_eq!(keywords, vec!["aws", "lambda", "v"]);
    }

    #[test]
    fn test_stop_words_removed() {
        let keywords = extract_keywords("explain to me how the scheduler does work");
        assert_eq!(keywords, vec!["scheduler", "work"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let keywords = extract_keywords("lambda lambda queue lambda");
        assert_eq!(keywords, vec!["lambda", "lambda", "queue", "lambda"]);
    }

    #[test]
    fn test_numbers_and_punctuation_separate_tokens() {
        let keywords = extract_keywords("s3:bucket-policy,2024edition");
        assert_eq!(keywords, vec!["s", "bucket", "policy", "edition"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("42 18 --- !!").is_empty());
    }
}
