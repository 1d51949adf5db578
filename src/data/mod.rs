//! # Data Module
//!
//! Record types and file loading for the train, predict and evaluate stages.

mod loader;
mod types;

pub use loader::DataLoader;
pub use types::{LabelRecord, LabeledTweet, Prediction, Sentiment, TestTweet};
