//! Influencer records, catalogs, queries and results

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use crate::error::{RecommendError, Result};

/// The two ranking features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Followers,
    EngagementRate,
}

impl Feature {
    /// Features in vector order
    pub const ALL: [Feature; 2] = [Feature::Followers, Feature::EngagementRate];

    /// Position of this feature in a feature vector
    pub fn index(self) -> usize {
        match self {
            Feature::Followers => 0,
            Feature::EngagementRate => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Followers => "followers",
            Feature::EngagementRate => "engagement_rate",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One influencer with raw magnitudes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRecord {
    /// Unique handle
    pub username: String,
    /// Follower count
    pub followers: f64,
    /// Average views per post
    pub average_views: f64,
    /// `average_views / followers`
    pub engagement_rate: f64,
}

impl InfluencerRecord {
    /// Create a record and derive its engagement rate
    ///
    /// `followers` must be positive; ingestion filters zero-follower rows
    /// before calling this.
    pub fn new(username: impl Into<String>, followers: f64, average_views: f64) -> Self {
        Self {
            username: username.into(),
            followers,
            average_views,
            engagement_rate: average_views / followers,
        }
    }

    /// Raw feature vector `[followers, engagement_rate]`
    pub fn features(&self) -> [f64; 2] {
        [self.followers, self.engagement_rate]
    }

    /// Get one raw feature
    pub fn feature(&self, feature: Feature) -> f64 {
        self.features()[feature.index()]
    }
}

/// Ordered collection of influencer records built from one source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Records in source order
    pub records: Vec<InfluencerRecord>,

    /// Data rows read from the source
    pub rows_read: usize,

    /// Rows dropped for missing data (including zero-follower rows under
    /// the default policy)
    pub rows_dropped: usize,

    /// Source file, if the catalog was loaded from disk
    pub source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog directly from records
    pub fn from_records(records: Vec<InfluencerRecord>) -> Self {
        Self {
            rows_read: records.len(),
            records,
            rows_dropped: 0,
            source: None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfluencerRecord> {
        self.records.iter()
    }

    /// Collect one raw feature across all records
    pub fn column(&self, feature: Feature) -> Vec<f64> {
        self.records.iter().map(|r| r.feature(feature)).collect()
    }

    /// Usernames that appear more than once, in first-repeat order
    pub fn duplicate_usernames(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for record in &self.records {
            let name = record.username.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }

        duplicates
    }
}

/// What the campaign planner is looking for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Desired follower count
    pub followers: f64,
    /// Desired engagement rate
    pub engagement_rate: f64,
}

impl Query {
    pub fn new(followers: f64, engagement_rate: f64) -> Self {
        Self {
            followers,
            engagement_rate,
        }
    }

    /// Reject negative or non-finite values
    pub fn validate(&self) -> Result<()> {
        for feature in Feature::ALL {
            let value = self.features()[feature.index()];
            if !value.is_finite() {
                return Err(RecommendError::InvalidQuery(format!(
                    "{} must be a finite number, got {}",
                    feature, value
                )));
            }
            if value < 0.0 {
                return Err(RecommendError::InvalidQuery(format!(
                    "{} must not be negative, got {}",
                    feature, value
                )));
            }
        }
        Ok(())
    }

    /// Raw query vector `[followers, engagement_rate]`
    pub fn features(&self) -> [f64; 2] {
        [self.followers, self.engagement_rate]
    }
}

impl From<(f64, f64)> for Query {
    fn from((followers, engagement_rate): (f64, f64)) -> Self {
        Self::new(followers, engagement_rate)
    }
}

/// One recommended influencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Position in the result list, starting at 0
    pub rank: usize,
    pub username: String,
    /// Raw follower count
    pub followers: f64,
    /// Raw engagement rate
    pub engagement_rate: f64,
    /// Cosine similarity to the query in standardized space
    pub similarity: f64,
}
