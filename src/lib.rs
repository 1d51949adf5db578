//! # Tweet Sentiment
//!
//! Lexicon-based sentiment classification for short social media messages,
//! trained and evaluated entirely from delimited text files.
//!
//! ## Modules
//!
//! - `data` - Record types and file loading
//! - `nlp` - Tokenization and token normalization
//! - `sentiment` - Lexicon training, scoring and the classifier facade
//! - `eval` - Accuracy and error reporting
//!
//! ## Example Usage
//!
//! ```no_run
//! use tweet_sentiment::{DataLoader, Evaluator, SentimentClassifier};
//!
//! fn main() -> tweet_sentiment::Result<()> {
//!     // Train on labeled records
//!     let training = DataLoader::load_training("data/train.csv")?;
//!     let mut classifier = SentimentClassifier::new();
//!     classifier.train(&training);
//!
//!     // Predict the test records and write them out
//!     let test = DataLoader::load_test("data/test.csv")?;
//!     let predictions = classifier.predict_batch(&test);
//!     DataLoader::save_predictions(&predictions, "predictions.csv")?;
//!
//!     // Score the written predictions against ground truth
//!     let truth = DataLoader::load_truth("data/truth.csv")?;
//!     let predicted = DataLoader::load_predictions("predictions.csv")?;
//!     let report = Evaluator::evaluate(&truth, &predicted)?;
//!     println!("Accuracy: {:.3}", report.accuracy);
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod eval;
pub mod nlp;
pub mod sentiment;

// Re-exports for convenience
pub use data::{DataLoader, LabelRecord, LabeledTweet, Prediction, Sentiment, TestTweet};
pub use error::{Error, Result};
pub use eval::{EvaluationReport, Evaluator, Misclassification};
pub use nlp::{Tokenizer, WordNormalizer};
pub use sentiment::{
    LexiconStats, SentimentClassifier, SentimentLexicon, SentimentScore, SentimentScorer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default scoring thresholds
pub mod defaults {
    /// Score added per strong-indicator token
    pub const STRONG_TOKEN_BOOST: f64 = 0.8;

    /// Minimum weight gap for a word to count toward the scores
    pub const MIN_WEIGHT_GAP: f64 = 0.2;

    /// Score difference below which the fallback rules decide
    pub const DECISION_MARGIN: f64 = 0.15;

    /// Multiplier applied when a strong indicator was seen
    pub const STRONG_MULTIPLIER: f64 = 1.5;

    /// Score added per smiling or frowning emoticon occurrence
    pub const EMOTICON_BOOST: f64 = 0.5;
}
