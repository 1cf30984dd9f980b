//! Error types for the decompound engine.

use thiserror::Error;

/// The main error type for decompounding operations.
#[derive(Error, Debug)]
pub enum SplitError {
    /// I/O error while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scoring was attempted against an empty vocabulary.
    ///
    /// The smoothed relative frequency has a zero denominator when no word
    /// counts are loaded, so this is surfaced as an error instead of a
    /// division by zero.
    #[error("Cannot score against an empty vocabulary")]
    EmptyVocabulary,

    /// A segmentation with no atoms was passed to the scorer.
    #[error("Cannot score a segmentation with no atoms")]
    EmptySegmentation,
}

/// Result type alias for decompounding operations.
pub type Result<T> = std::result::Result<T, SplitError>;
