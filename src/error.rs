//! Error types for the tweet sentiment library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A required input or output file cannot be opened
    #[error("unable to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A label-row file contains an unreadable record
    #[error("invalid label record: {0}")]
    Csv(#[from] csv::Error),

    /// A label could not be parsed as an integer during evaluation
    #[error("label '{0}' is not numeric")]
    ParseLabel(String),

    /// Evaluation was given zero comparable rows
    #[error("no rows to evaluate")]
    NoData,
}
