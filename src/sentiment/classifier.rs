//! # Sentiment Classifier
//!
//! Facade owning the tokenizer, normalizer, lexicon and scorer; trains on
//! labeled records and predicts labels for new messages.

use super::lexicon::SentimentLexicon;
use super::scorer::{SentimentScore, SentimentScorer};
use crate::data::{LabeledTweet, Prediction, Sentiment, TestTweet};
use crate::nlp::{Tokenizer, WordNormalizer};

/// Lexicon-based binary sentiment classifier
pub struct SentimentClassifier {
    /// Message tokenizer
    tokenizer: Tokenizer,
    /// Token normalizer for the training path
    normalizer: WordNormalizer,
    /// Scoring engine for the prediction path
    scorer: SentimentScorer,
    /// Word weights accumulated by training
    lexicon: SentimentLexicon,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    /// Create an untrained classifier
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            normalizer: WordNormalizer::new(),
            scorer: SentimentScorer::new(),
            lexicon: SentimentLexicon::new(),
        }
    }

    /// Learn word weights from labeled records
    ///
    /// Accumulates on top of whatever the lexicon already holds; a fresh
    /// model needs a fresh classifier.
    pub fn train(&mut self, tweets: &[LabeledTweet]) {
        for tweet in tweets {
            for token in self.tokenizer.tokenize(&tweet.text) {
                if let Some(word) = self.normalizer.normalize(&token) {
                    self.lexicon.add(&word, tweet.sentiment);
                }
            }
        }
    }

    /// Predict the label for one message
    pub fn predict(&self, text: &str) -> Sentiment {
        self.score(text).label
    }

    /// Score one message and return the full breakdown
    pub fn score(&self, text: &str) -> SentimentScore {
        let tokens = self.tokenizer.tokenize(text);
        self.scorer.score(&self.lexicon, &tokens)
    }

    /// Predict labels for every test record, one prediction per record
    pub fn predict_batch(&self, tweets: &[TestTweet]) -> Vec<Prediction> {
        tweets
            .iter()
            .map(|tweet| Prediction {
                id: tweet.id.clone(),
                label: self.predict(&tweet.text),
            })
            .collect()
    }

    /// Trained lexicon
    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }
}
