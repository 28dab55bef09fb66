//! Error types for influence-core
//!
//! Ingestion errors abort catalog construction; there is no partial
//! catalog. Rows with missing data are not errors: they are dropped and
//! counted in [`Catalog::rows_dropped`](crate::record::Catalog).
//!
//! [`UserNotice`] folds errors and empty results into the three situations
//! a planner needs to tell apart: no data, no matches, bad input.

use influence_io::{IoError, ParseError};
use influence_stats::StatsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::record::{Feature, Recommendation};

/// Main error type for recommendation operations
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Dataset could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] IoError),

    /// A numeric cell could not be converted
    #[error("Line {line}, column '{column}': {source}")]
    Parse {
        line: usize,
        column: String,
        source: ParseError,
    },

    /// A count is outside its valid range
    #[error("Line {line}, column '{column}': {value} is negative")]
    InvalidRange {
        line: usize,
        column: String,
        value: f64,
    },

    /// Zero followers under the reject policy
    #[error("Line {line}: '{username}' has zero followers, engagement rate is undefined")]
    ZeroFollowers { line: usize, username: String },

    /// Constant feature column
    #[error("Feature '{feature}' has zero variance and cannot be standardized")]
    DegenerateFeature { feature: Feature },

    /// NaN or infinity in a feature column
    #[error("Feature '{feature}' contains non-finite values")]
    NonFiniteFeature { feature: Feature },

    /// Scaling parameters could not be fitted for a reason other than the
    /// feature values themselves
    #[error("Standardization failed: {0}")]
    Standardization(StatsError),

    /// Cosine similarity cannot be computed
    #[error("Similarity is undefined: {reason}")]
    UndefinedSimilarity { reason: String },

    /// Nothing left to standardize or rank
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Query values out of range
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for recommendation operations
pub type Result<T> = std::result::Result<T, RecommendError>;

/// User-facing classification of an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserNotice {
    /// The dataset is missing or has no usable rows
    NoData,
    /// The query ran but returned nothing
    NoMatches,
    /// The query values cannot be used
    InvalidInput,
    /// Anything else, usually a malformed dataset
    Failed,
}

impl UserNotice {
    /// Classify an error
    pub fn from_error(err: &RecommendError) -> Self {
        match err {
            RecommendError::EmptyCatalog | RecommendError::Io(IoError::FileNotFound(_)) => {
                UserNotice::NoData
            }
            RecommendError::InvalidQuery(_) | RecommendError::UndefinedSimilarity { .. } => {
                UserNotice::InvalidInput
            }
            _ => UserNotice::Failed,
        }
    }

    /// Classify a successful result; `None` means there is something to show
    pub fn for_results(results: &[Recommendation]) -> Option<Self> {
        if results.is_empty() {
            Some(UserNotice::NoMatches)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            UserNotice::NoData => "No influencer data is available.",
            UserNotice::NoMatches => "No influencers match this profile.",
            UserNotice::InvalidInput => {
                "Invalid input: followers and engagement rate must be non-negative and \
                 must not both sit exactly at the catalog average."
            }
            UserNotice::Failed => "The recommendation could not be computed.",
        }
    }
}
