//! Feature standardization
//!
//! Fits a z-score scale for followers and engagement rate over the whole
//! catalog. The fitted [`ScalingParameters`] are kept with the standardized
//! catalog so that every query is projected with exactly the parameters the
//! rows were standardized with.

use std::path::{Path, PathBuf};

use influence_stats::{FeatureScale, StandardScaler, StatsError, SummaryStats};
use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};
use crate::record::{Catalog, Feature, InfluencerRecord, Query};

/// Mean and population standard deviation of each ranking feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingParameters {
    pub followers: FeatureScale,
    pub engagement_rate: FeatureScale,
}

impl ScalingParameters {
    /// Get the scale of one feature
    pub fn scale(&self, feature: Feature) -> FeatureScale {
        match feature {
            Feature::Followers => self.followers,
            Feature::EngagementRate => self.engagement_rate,
        }
    }

    /// Standardize a raw `[followers, engagement_rate]` vector
    pub fn standardize(&self, raw: [f64; 2]) -> [f64; 2] {
        [
            self.followers.transform(raw[0]),
            self.engagement_rate.transform(raw[1]),
        ]
    }

    /// Map a standardized vector back to raw units
    pub fn unstandardize(&self, z: [f64; 2]) -> [f64; 2] {
        [
            self.followers.inverse(z[0]),
            self.engagement_rate.inverse(z[1]),
        ]
    }

    /// Project a raw query into the catalog's standardized space
    pub fn project(&self, query: &Query) -> [f64; 2] {
        self.standardize(query.features())
    }

    fn from_scaler(scaler: &StandardScaler) -> Self {
        let scales = scaler.scales();
        Self {
            followers: scales[Feature::Followers.index()],
            engagement_rate: scales[Feature::EngagementRate.index()],
        }
    }
}

/// A record plus its standardized feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedRecord {
    /// Raw record, unchanged
    pub record: InfluencerRecord,
    /// `[z_followers, z_engagement_rate]`
    pub features: [f64; 2],
}

/// Immutable standardized catalog
///
/// Built once and shared read-only between ranking calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedCatalog {
    rows: Vec<StandardizedRecord>,
    params: ScalingParameters,
    rows_dropped: usize,
    source: Option<PathBuf>,
}

impl StandardizedCatalog {
    pub fn rows(&self) -> &[StandardizedRecord] {
        &self.rows
    }

    /// Parameters the rows were standardized with
    pub fn params(&self) -> &ScalingParameters {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped during ingestion
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Raw records in catalog order
    pub fn records(&self) -> impl Iterator<Item = &InfluencerRecord> {
        self.rows.iter().map(|row| &row.record)
    }
}

/// Fit scaling parameters on the catalog and standardize every row
///
/// Fails with `EmptyCatalog` when there are no rows and with
/// `DegenerateFeature` when either feature is constant (which includes any
/// single-row catalog).
pub fn fit_transform(catalog: &Catalog) -> Result<(StandardizedCatalog, ScalingParameters)> {
    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }

    let followers = catalog.column(Feature::Followers);
    let engagement = catalog.column(Feature::EngagementRate);

    for (feature, values) in [
        (Feature::Followers, &followers),
        (Feature::EngagementRate, &engagement),
    ] {
        let stats = SummaryStats::from_data(values);
        tracing::debug!(
            "{}: mean={:.4} std_dev={:.4} min={} max={}",
            feature,
            stats.mean,
            stats.std_dev,
            stats.min,
            stats.max
        );
    }

    let scaler = StandardScaler::fit(&[followers.as_slice(), engagement.as_slice()])
        .map_err(map_stats_error)?;
    let params = ScalingParameters::from_scaler(&scaler);

    let rows = catalog
        .iter()
        .map(|record| StandardizedRecord {
            features: params.standardize(record.features()),
            record: record.clone(),
        })
        .collect();

    let standardized = StandardizedCatalog {
        rows,
        params,
        rows_dropped: catalog.rows_dropped,
        source: catalog.source.clone(),
    };

    Ok((standardized, params))
}

fn map_stats_error(err: StatsError) -> RecommendError {
    match err {
        StatsError::Empty => RecommendError::EmptyCatalog,
        StatsError::DegenerateFeature { index } => RecommendError::DegenerateFeature {
            feature: Feature::ALL[index],
        },
        StatsError::NonFinite { index } => RecommendError::NonFiniteFeature {
            feature: Feature::ALL[index],
        },
        other => RecommendError::Standardization(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserNotice;

    fn two_row_catalog() -> Catalog {
        Catalog::from_records(vec![
            InfluencerRecord::new("A", 1_000_000.0, 100_000.0),
            InfluencerRecord::new("B", 2_000_000.0, 1_800_000.0),
        ])
    }

    #[test]
    fn test_fit_transform_two_rows() {
        let (standardized, params) = fit_transform(&two_row_catalog()).unwrap();

        assert_eq!(params.followers.mean, 1_500_000.0);
        assert_eq!(params.followers.std_dev, 500_000.0);
        assert!((params.engagement_rate.mean - 0.5).abs() < 1e-12);
        assert!((params.engagement_rate.std_dev - 0.4).abs() < 1e-12);

        let a = standardized.rows()[0].features;
        let b = standardized.rows()[1].features;
        assert!((a[0] + 1.0).abs() < 1e-12 && (a[1] + 1.0).abs() < 1e-12);
        assert!((b[0] - 1.0).abs() < 1e-12 && (b[1] - 1.0).abs() < 1e-12);
        assert_eq!(standardized.params(), &params);
    }

    #[test]
    fn test_raw_values_retained() {
        let catalog = two_row_catalog();
        let (standardized, _) = fit_transform(&catalog).unwrap();
        let raw: Vec<_> = standardized.records().cloned().collect();
        assert_eq!(raw, catalog.records);
    }

    #[test]
    fn test_standardized_columns_are_unit_scale() {
        let catalog = Catalog::from_records(vec![
            InfluencerRecord::new("a", 12_000.0, 600.0),
            InfluencerRecord::new("b", 450_000.0, 90_000.0),
            InfluencerRecord::new("c", 3_100_000.0, 120_000.0),
            InfluencerRecord::new("d", 80_000.0, 40_000.0),
            InfluencerRecord::new("e", 999_000.0, 10_000.0),
        ]);
        let (standardized, _) = fit_transform(&catalog).unwrap();

        for feature in Feature::ALL {
            let z: Vec<f64> = standardized
                .rows()
                .iter()
                .map(|row| row.features[feature.index()])
                .collect();
            let stats = SummaryStats::from_data(&z);
            assert!(stats.mean.abs() < 1e-9, "{} mean {}", feature, stats.mean);
            assert!((stats.std_dev - 1.0).abs() < 1e-9, "{} std {}", feature, stats.std_dev);
        }
    }

    #[test]
    fn test_project_matches_row_standardization() {
        let (standardized, params) = fit_transform(&two_row_catalog()).unwrap();
        let projected = params.project(&Query::new(1_000_000.0, 0.1));
        let row = standardized.rows()[0].features;
        assert!((projected[0] - row[0]).abs() < 1e-12);
        assert!((projected[1] - row[1]).abs() < 1e-12);

        let back = params.unstandardize(projected);
        assert!((back[0] - 1_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_engagement_is_degenerate() {
        let catalog = Catalog::from_records(vec![
            InfluencerRecord::new("a", 1_000.0, 100.0),
            InfluencerRecord::new("b", 2_000.0, 200.0),
        ]);
        let err = fit_transform(&catalog).unwrap_err();
        assert!(matches!(
            err,
            RecommendError::DegenerateFeature {
                feature: Feature::EngagementRate
            }
        ));
    }

    #[test]
    fn test_single_row_is_degenerate() {
        let catalog = Catalog::from_records(vec![InfluencerRecord::new("a", 1_000.0, 100.0)]);
        assert!(matches!(
            fit_transform(&catalog),
            Err(RecommendError::DegenerateFeature {
                feature: Feature::Followers
            })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(matches!(
            fit_transform(&Catalog::default()),
            Err(RecommendError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_fit_shape_errors_are_standardization_errors() {
        let err = map_stats_error(StatsError::DimensionMismatch {
            expected: 3,
            actual: 2,
        });
        assert!(matches!(
            err,
            RecommendError::Standardization(StatsError::DimensionMismatch { .. })
        ));
        assert_eq!(UserNotice::from_error(&err), UserNotice::Failed);
    }

    #[test]
    fn test_non_finite_feature() {
        let catalog = Catalog::from_records(vec![
            InfluencerRecord::new("a", 0.0, 100.0),
            InfluencerRecord::new("b", 2_000.0, 200.0),
        ]);
        assert!(matches!(
            fit_transform(&catalog),
            Err(RecommendError::NonFiniteFeature {
                feature: Feature::EngagementRate
            })
        ));
    }
}
