//! Error types for the model contract.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by host-side collaborators.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The source-of-truth read (fresh load) failed.
    #[error("source error: {0}")]
    Source(String),

    /// Materializing a relation query failed.
    #[error("relation error: {0}")]
    Relation(String),
}
