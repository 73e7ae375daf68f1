//! Core error types
//!
//! Everything in this crate is a pure computation, so the only failures are
//! malformed inputs.

use thiserror::Error;

/// Errors raised by curve, metric and corpus-statistics computations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Recall and precision sequences have different lengths
    #[error("length mismatch: recall has {recall} points but precision has {precision}")]
    LengthMismatch {
        /// Number of recall values supplied
        recall: usize,
        /// Number of precision values supplied
        precision: usize,
    },

    /// Metrics were requested for an empty curve
    #[error("cannot compute metrics for an empty curve")]
    EmptyInput,

    /// Corpus identifier outside the known set
    #[error("unknown corpus: {0}")]
    UnknownCorpus(String),

    /// Model variant identifier outside the known set
    #[error("unknown model variant: {0}")]
    UnknownModel(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
