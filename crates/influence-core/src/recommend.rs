//! Programmatic surface for the presentation layer
//!
//! `load_and_prepare` builds the standardized catalog once; `recommend`
//! ranks it as often as needed and returns plain result records.

use std::path::Path;
use std::sync::Arc;

use crate::config::{RankingConfig, RecommenderConfig};
use crate::error::Result;
use crate::ingest;
use crate::rank::rank;
use crate::record::{Query, Recommendation};
use crate::standardize::{fit_transform, ScalingParameters, StandardizedCatalog};

/// Load a dataset with default settings and standardize it
pub fn load_and_prepare(
    path: impl AsRef<Path>,
) -> Result<(StandardizedCatalog, ScalingParameters)> {
    load_and_prepare_with_config(path, &RecommenderConfig::default())
}

/// Load a dataset and standardize it
pub fn load_and_prepare_with_config(
    path: impl AsRef<Path>,
    config: &RecommenderConfig,
) -> Result<(StandardizedCatalog, ScalingParameters)> {
    config.validate()?;
    let catalog = ingest::load_with_config(path, &config.ingest)?;
    fit_transform(&catalog)
}

/// Recommend the `top_n` influencers closest to the query profile
pub fn recommend(
    query: impl Into<Query>,
    catalog: &StandardizedCatalog,
    top_n: usize,
) -> Result<Vec<Recommendation>> {
    let query = query.into();
    let ranked = rank(&query, catalog, top_n)?;

    Ok(ranked
        .into_iter()
        .enumerate()
        .map(|(position, m)| Recommendation {
            rank: position,
            username: m.record.username.clone(),
            followers: m.record.followers,
            engagement_rate: m.record.engagement_rate,
            similarity: m.similarity,
        })
        .collect())
}

/// A shared catalog plus ranking settings
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<StandardizedCatalog>,
    ranking: RankingConfig,
}

impl Recommender {
    pub fn new(catalog: Arc<StandardizedCatalog>, ranking: RankingConfig) -> Self {
        Self { catalog, ranking }
    }

    /// Load, standardize and wrap a dataset
    pub fn from_path(path: impl AsRef<Path>, config: &RecommenderConfig) -> Result<Self> {
        let (catalog, _) = load_and_prepare_with_config(path, config)?;
        Ok(Self::new(Arc::new(catalog), config.ranking.clone()))
    }

    pub fn catalog(&self) -> &Arc<StandardizedCatalog> {
        &self.catalog
    }

    /// Recommend with the configured `top_n`
    pub fn recommend(&self, query: impl Into<Query>) -> Result<Vec<Recommendation>> {
        recommend(query, &self.catalog, self.ranking.top_n)
    }
}
