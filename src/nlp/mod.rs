//! # Text Processing Module
//!
//! Tokenization and token normalization for short messages.

mod normalizer;
mod tokenizer;

pub use normalizer::WordNormalizer;
pub use tokenizer::Tokenizer;
