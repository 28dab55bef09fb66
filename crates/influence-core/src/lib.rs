//! influence-core - Influencer recommendation engine
//!
//! Matches a desired follower count / engagement rate profile against a
//! catalog of influencers:
//!
//! - **Ingestion**: CSV rows to records, magnitude strings to numbers,
//!   engagement rate derived as `average_views / followers`
//! - **Standardization**: z-scores for both features, parameters retained
//! - **Ranking**: cosine similarity in standardized space, stable top-N
//!
//! # Usage
//!
//! ```no_run
//! use influence_core::{load_and_prepare, recommend, Query};
//!
//! let (catalog, _params) = load_and_prepare("influencers.csv")?;
//! for rec in recommend(Query::new(50_000.0, 0.05), &catalog, 5)? {
//!     println!("{} {:.3}", rec.username, rec.similarity);
//! }
//! # Ok::<(), influence_core::RecommendError>(())
//! ```
//!
//! The standardized catalog is immutable; share it with `Arc` (or through a
//! [`CatalogCache`]) and rank from as many threads as needed.

pub mod cache;
pub mod config;
pub mod error;
pub mod ingest;
pub mod rank;
pub mod recommend;
pub mod record;
pub mod standardize;

pub use cache::CatalogCache;
pub use config::{
    ColumnMapping, ConfigError, IngestConfig, MissingValueScope, RankingConfig,
    RecommenderConfig, ZeroFollowerPolicy, DEFAULT_DELIMITER, DEFAULT_TOP_N,
};
pub use error::{RecommendError, Result, UserNotice};
pub use rank::{rank, RankedMatch};
pub use recommend::{load_and_prepare, load_and_prepare_with_config, recommend, Recommender};
pub use record::{Catalog, Feature, InfluencerRecord, Query, Recommendation};
pub use standardize::{fit_transform, ScalingParameters, StandardizedCatalog, StandardizedRecord};

pub use influence_io::{convert_to_number, ParseError};
