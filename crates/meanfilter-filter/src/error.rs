//! Error types for meanfilter-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error (non-square input, bad dimensions)
    #[error("core error: {0}")]
    Core(#[from] meanfilter_core::Error),

    /// Negative window half-width
    #[error("invalid half-width: {0} (must be >= 0)")]
    InvalidHalfWidth(i64),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
