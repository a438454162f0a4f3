//! Search-query and claim-keyword derivation.

use std::collections::HashSet;

/// Function words dropped from search queries. Tokens of one or two
/// characters are dropped regardless, so the list starts at three.
const STOPWORDS: [&str; 63] = [
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "before", "being",
    "but", "can", "could", "did", "does", "for", "from", "had", "has", "have", "her", "his",
    "how", "into", "its", "just", "may", "more", "most", "not", "now", "only", "our", "out",
    "over", "said", "she", "should", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "was", "were", "what", "when", "where", "which",
    "who", "will", "with", "would", "you", "your",
];

/// Reduce a claim to its content words for the search API.
///
/// Strips punctuation, drops stopwords and tokens of two characters or
/// fewer, dedups case-insensitively preserving first occurrence. A claim
/// with no surviving tokens falls back to the raw claim.
pub fn build_query(claim: &str) -> String {
    let mut seen = HashSet::new();
    let mut keywords: Vec<String> = Vec::new();

    for token in claim.split_whitespace() {
        let cleaned: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
        if cleaned.len() <= 2 {
            continue;
        }
        let folded = cleaned.to_lowercase();
        if STOPWORDS.contains(&folded.as_str()) {
            continue;
        }
        if seen.insert(folded) {
            keywords.push(cleaned);
        }
    }

    if keywords.is_empty() {
        claim.trim().to_string()
    } else {
        keywords.join(" ")
    }
}

/// Content words of a text: lowercased, punctuation-stripped, longer
/// than three characters. Used for the sentence prefilter and the
/// extractive summarizer's frequency scoring.
pub fn content_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| token.len() > 3)
        .collect()
}
