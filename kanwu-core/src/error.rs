//! Error types for the alignment core

use thiserror::Error;

/// Errors surfaced by the alignment core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// Invalid configuration, reported before any alignment work begins
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller requested cancellation mid-run
    #[error("alignment cancelled")]
    Cancelled,
}

/// Result type for alignment operations
pub type Result<T> = std::result::Result<T, AlignError>;
