//! influence-stats - Statistical primitives for influencer ranking
//!
//! This crate provides the numeric building blocks of the pipeline:
//!
//! - **SummaryStats**: count, mean, population variance, min, max
//! - **StandardScaler**: per-feature z-score scaling with retained parameters
//! - **Cosine similarity**: direction-only comparison of feature vectors
//!
//! Standard deviations use the population convention (ddof = 0) throughout,
//! so scaling here matches scikit-learn's `StandardScaler`.

pub mod error;
pub mod scaler;
pub mod similarity;
pub mod summary;

pub use error::*;
pub use scaler::*;
pub use similarity::*;
pub use summary::*;
