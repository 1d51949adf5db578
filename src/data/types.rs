//! # Core Data Types
//!
//! Records flowing through the train, predict and evaluate stages.

use serde::{Deserialize, Serialize};

/// Binary sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Positive sentiment, output code 4
    Positive,
    /// Negative sentiment, output code 0
    Negative,
}

impl Sentiment {
    /// Map a raw training label to a polarity
    ///
    /// The label "4" is positive; every other code, neutral included, folds
    /// into negative.
    pub fn from_label(raw: &str) -> Self {
        if raw == "4" {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    /// Numeric code written to prediction output
    pub fn code(&self) -> i32 {
        match self {
            Sentiment::Positive => 4,
            Sentiment::Negative => 0,
        }
    }
}

/// One labeled training record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledTweet {
    /// Opaque identifier
    pub id: String,
    /// Raw message text
    pub text: String,
    /// Label parsed from the training file
    pub sentiment: Sentiment,
}

impl LabeledTweet {
    /// Create a new labeled record
    pub fn new(id: impl Into<String>, text: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sentiment,
        }
    }
}

/// One unlabeled record from the test file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestTweet {
    /// Opaque identifier
    pub id: String,
    /// Raw message text
    pub text: String,
}

impl TestTweet {
    /// Create a new unlabeled record
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A predicted label for one test record
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Identifier of the record the label belongs to
    pub id: String,
    /// Predicted polarity
    pub label: Sentiment,
}

/// One row of a predictions or ground-truth file
///
/// Labels stay raw strings here; the evaluator trims and compares them, and
/// only parses them numerically when a pair disagrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Label field as written in the file
    pub label: String,
    /// Record identifier
    pub id: String,
}

impl LabelRecord {
    /// Create a new label row
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}
