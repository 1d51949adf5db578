//! # Scorer
//!
//! Multi-pass scoring and decision procedure turning a tokenized message
//! into a sentiment label.

use std::collections::HashSet;

use super::lexicon::SentimentLexicon;
use crate::data::Sentiment;
use crate::defaults;
use crate::nlp::WordNormalizer;

/// Tokens counted as strong positive signals before any lexicon lookup
const STRONG_POSITIVE_TOKENS: &[&str] = &["love", "awesome", "amazing", "thank", "thanks", "best"];

/// Tokens counted as strong negative signals
const STRONG_NEGATIVE_TOKENS: &[&str] = &["hate", "terrible", "worst", "sucks", "horrible"];

/// Tokens that flip the weight of the next scored word
const NEGATION_TOKENS: &[&str] = &["not", "no", "never", "don't", "doesn't", "didn't"];

/// Scoring engine reading the lexicon built during training
pub struct SentimentScorer {
    /// Normalizer for lexicon lookups
    normalizer: WordNormalizer,
    /// Strong positive token set
    strong_positive: HashSet<&'static str>,
    /// Strong negative token set
    strong_negative: HashSet<&'static str>,
    /// Negation cue set
    negations: HashSet<&'static str>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        Self {
            normalizer: WordNormalizer::new(),
            strong_positive: STRONG_POSITIVE_TOKENS.iter().copied().collect(),
            strong_negative: STRONG_NEGATIVE_TOKENS.iter().copied().collect(),
            negations: NEGATION_TOKENS.iter().copied().collect(),
        }
    }

    /// Score a tokenized message against the lexicon
    ///
    /// Three passes over the tokens: a strong-indicator scan, a weighted
    /// accumulation with one-shot negation flipping, and an emoticon boost.
    /// Pure with respect to the lexicon; nothing is learned here.
    pub fn score(&self, lexicon: &SentimentLexicon, tokens: &[String]) -> SentimentScore {
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut strong_positive = false;
        let mut strong_negative = false;

        // Strong indicators count regardless of lexicon state
        for token in tokens {
            let lower = token.to_lowercase();
            if self.strong_positive.contains(lower.as_str()) {
                strong_positive = true;
                positive += defaults::STRONG_TOKEN_BOOST;
            } else if self.strong_negative.contains(lower.as_str()) {
                strong_negative = true;
                negative += defaults::STRONG_TOKEN_BOOST;
            }
        }

        // Weighted accumulation; a negation cue flips the next scored word
        let mut negated = false;
        let mut scored_words = 0usize;
        for token in tokens {
            let lower = token.to_lowercase();
            if self.negations.contains(lower.as_str()) {
                negated = true;
                continue;
            }

            let word = match self.normalizer.normalize(token) {
                Some(word) => word,
                None => continue,
            };

            let pos_count = lexicon.positive_count(&word) as f64;
            let neg_count = lexicon.negative_count(&word) as f64;
            let smoothed_total = pos_count + neg_count + 1.0;
            let mut pos_weight = pos_count / smoothed_total;
            let mut neg_weight = neg_count / smoothed_total;

            if negated {
                std::mem::swap(&mut pos_weight, &mut neg_weight);
                negated = false;
            }

            // Words the lexicon is unsure about contribute nothing
            if (pos_weight - neg_weight).abs() > defaults::MIN_WEIGHT_GAP {
                positive += pos_weight;
                negative += neg_weight;
                scored_words += 1;
            }
        }

        if scored_words > 0 {
            positive /= scored_words as f64;
            negative /= scored_words as f64;
        }

        // A dangling negation cue suppresses the strong multipliers
        if strong_positive && !negated {
            positive *= defaults::STRONG_MULTIPLIER;
        }
        if strong_negative && !negated {
            negative *= defaults::STRONG_MULTIPLIER;
        }

        // Emoticons boost whichever side they smile for
        for token in tokens {
            if token.contains(":)") || token.contains(":D") {
                positive += defaults::EMOTICON_BOOST;
            }
            if token.contains(":(") {
                negative += defaults::EMOTICON_BOOST;
            }
        }

        SentimentScore {
            label: decide(positive, negative, strong_positive, strong_negative),
            positive,
            negative,
            strong_positive,
            strong_negative,
            scored_words,
        }
    }
}

/// Full scoring breakdown for one message
#[derive(Debug, Clone, Copy)]
pub struct SentimentScore {
    /// Decided label
    pub label: Sentiment,
    /// Accumulated positive score
    pub positive: f64,
    /// Accumulated negative score
    pub negative: f64,
    /// A strong positive token appeared
    pub strong_positive: bool,
    /// A strong negative token appeared
    pub strong_negative: bool,
    /// Words that cleared the confidence gap
    pub scored_words: usize,
}

/// Decision rule over the final scores
///
/// Inside the low-confidence margin the strong flags decide, positive flag
/// first; with neither flag set, ties go to positive.
fn decide(positive: f64, negative: f64, strong_positive: bool, strong_negative: bool) -> Sentiment {
    let diff = positive - negative;
    if diff.abs() < defaults::DECISION_MARGIN {
        if strong_positive {
            Sentiment::Positive
        } else if strong_negative {
            Sentiment::Negative
        } else if positive >= negative {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    } else if diff > 0.0 {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}
