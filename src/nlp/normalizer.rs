//! # Word Normalizer
//!
//! Maps raw tokens to lexicon keys, or to nothing when a token carries no
//! signal.

use std::collections::HashSet;

/// Stop words that never become lexicon keys on their own
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "need", "dare",
    "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
    "from", "as", "into", "through", "during", "before", "after",
    "above", "below", "between", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "just",
    "and", "but", "if", "or", "because", "until", "while", "although",
    "this", "that", "these", "those", "i", "me", "my", "myself", "we",
    "our", "ours", "ourselves", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "am",
];

/// Words kept even when the stop list contains them
const SENTIMENT_OVERRIDES: &[&str] = &[
    "not", "no", "never", "good", "bad", "great", "terrible", "awesome", "horrible",
];

/// Token normalizer turning raw tokens into lexicon keys
pub struct WordNormalizer {
    /// Stop words to drop
    stop_words: HashSet<&'static str>,
    /// Stop-list exceptions that carry sentiment
    overrides: HashSet<&'static str>,
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            overrides: SENTIMENT_OVERRIDES.iter().copied().collect(),
        }
    }

    /// Normalize a raw token into a lexicon key
    ///
    /// Tokens of at most three bytes containing `:`, `=` or `!` pass through
    /// unchanged, which keeps emoticons and short punctuation runs usable as
    /// keys. Every other token is reduced to its lowercase letters; `None`
    /// means the token carries no signal, either because nothing alphabetic
    /// remained or because it is a stop word without sentiment value.
    pub fn normalize(&self, token: &str) -> Option<String> {
        if token.len() <= 3 && token.chars().any(|c| matches!(c, ':' | '=' | '!')) {
            return Some(token.to_string());
        }

        let cleaned: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(|c| c.to_lowercase())
            .collect();

        if cleaned.is_empty() {
            return None;
        }

        if self.stop_words.contains(cleaned.as_str()) && !self.overrides.contains(cleaned.as_str())
        {
            return None;
        }

        Some(cleaned)
    }
}
