//! Error types for influence-stats

use thiserror::Error;

/// Errors from statistical operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// No values to fit on
    #[error("Cannot compute statistics over an empty dataset")]
    Empty,

    /// Feature has zero standard deviation and cannot be standardized
    #[error("Feature {index} has zero variance")]
    DegenerateFeature { index: usize },

    /// Feature contains NaN or infinity
    #[error("Feature {index} contains non-finite values")]
    NonFinite { index: usize },

    /// Cosine similarity against a zero vector is undefined
    #[error("Vector has zero magnitude")]
    ZeroMagnitude,

    /// Vectors or rows of different lengths
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
