//! # Sentiment Lexicon
//!
//! Word-weight tables accumulated from labeled training records.

use std::collections::HashMap;

use crate::data::Sentiment;

/// Weight added for a recognized emoticon
const EMOTICON_WEIGHT: u32 = 4;
/// Weight added for a word from the strong-sentiment list
const STRONG_WORD_WEIGHT: u32 = 3;
/// Weight added for a word carrying a repeated punctuation run
const PUNCTUATION_WEIGHT: u32 = 2;
/// Weight added for every other word
const BASE_WEIGHT: u32 = 1;

/// Shortest `!`/`?` run that counts as emphasis
const PUNCTUATION_RUN_LEN: usize = 3;

/// Emoticons always counted as positive, whatever the record label says
const POSITIVE_EMOTICONS: &[&str] = &[":)", ":D", "=)", "=D", ";)", ";D"];

/// Emoticons always counted as negative
const NEGATIVE_EMOTICONS: &[&str] = &[":(", "=(", ";("];

/// Words weighted as strong sentiment carriers during training
const STRONG_SENTIMENT_WORDS: &[&str] = &[
    "love", "awesome", "excellent", "amazing", "wonderful", "fantastic",
    "great", "perfect", "best", "happy", "hate", "terrible", "awful",
    "horrible", "worst", "sucks", "disgusting", "miserable",
];

/// Word-weight tables, one per polarity
///
/// Grows only while training; prediction reads it without mutation. A word
/// missing from a table simply counts as weight zero.
pub struct SentimentLexicon {
    /// Weights from positive-labeled occurrences
    positive: HashMap<String, u32>,
    /// Weights from negative-labeled occurrences
    negative: HashMap<String, u32>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self {
            positive: HashMap::new(),
            negative: HashMap::new(),
        }
    }

    /// Record one normalized word from a labeled record
    ///
    /// The added weight follows a fixed ladder: 4 for recognized emoticons
    /// (which also force the polarity bucket, overriding the record label),
    /// 3 for strong-sentiment words, 2 for words carrying a 3+ run of `!`
    /// or `?`, and 1 otherwise.
    pub fn add(&mut self, word: &str, label: Sentiment) {
        let (weight, polarity) = match emoticon_polarity(word) {
            Some(forced) => (EMOTICON_WEIGHT, forced),
            None => (word_weight(word), label),
        };

        let bucket = match polarity {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Negative => &mut self.negative,
        };
        *bucket.entry(word.to_string()).or_insert(0) += weight;
    }

    /// Accumulated positive weight for a word, zero when unseen
    pub fn positive_count(&self, word: &str) -> u32 {
        self.positive.get(word).copied().unwrap_or(0)
    }

    /// Accumulated negative weight for a word, zero when unseen
    pub fn negative_count(&self, word: &str) -> u32 {
        self.negative.get(word).copied().unwrap_or(0)
    }

    /// Whether nothing has been trained yet
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Table sizes
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            positive_entries: self.positive.len(),
            negative_entries: self.negative.len(),
        }
    }
}

/// Entry counts per polarity table
#[derive(Debug, Clone, Copy)]
pub struct LexiconStats {
    /// Distinct words in the positive table
    pub positive_entries: usize,
    /// Distinct words in the negative table
    pub negative_entries: usize,
}

/// Fixed polarity for emoticon keys, `None` for ordinary words
fn emoticon_polarity(word: &str) -> Option<Sentiment> {
    if POSITIVE_EMOTICONS.contains(&word) {
        Some(Sentiment::Positive)
    } else if NEGATIVE_EMOTICONS.contains(&word) {
        Some(Sentiment::Negative)
    } else {
        None
    }
}

/// Training weight for a non-emoticon word
fn word_weight(word: &str) -> u32 {
    if STRONG_SENTIMENT_WORDS.contains(&word) {
        STRONG_WORD_WEIGHT
    } else if has_punctuation_run(word) {
        PUNCTUATION_WEIGHT
    } else {
        BASE_WEIGHT
    }
}

/// True when the word contains a run of `!`/`?` at least three long
fn has_punctuation_run(word: &str) -> bool {
    let mut run = 0;
    for c in word.chars() {
        if c == '!' || c == '?' {
            run += 1;
            if run >= PUNCTUATION_RUN_LEN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
