//! # Sentiment Module
//!
//! Lexicon training, message scoring and the classifier facade.

mod classifier;
mod lexicon;
mod scorer;

pub use classifier::SentimentClassifier;
pub use lexicon::{LexiconStats, SentimentLexicon};
pub use scorer::{SentimentScore, SentimentScorer};
