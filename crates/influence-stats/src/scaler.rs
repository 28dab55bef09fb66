//! Standard scaling (z-scores) with retained parameters
//!
//! A [`StandardScaler`] is fit once on a reference dataset and then reused
//! to project any later vector into the same space. Keeping the fitted
//! [`FeatureScale`]s around is what makes a raw query comparable to the
//! standardized rows it was fit on.

use crate::error::{StatsError, StatsResult};
use crate::summary::SummaryStats;
use serde::{Deserialize, Serialize};

/// Mean and standard deviation of one feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScale {
    pub mean: f64,
    pub std_dev: f64,
}

impl FeatureScale {
    /// Fit a scale on one column. `index` is only used for error reporting.
    pub fn fit(values: &[f64], index: usize) -> StatsResult<Self> {
        if values.is_empty() {
            return Err(StatsError::Empty);
        }

        let stats = SummaryStats::from_data(values);
        if stats.missing > 0 {
            return Err(StatsError::NonFinite { index });
        }
        if stats.is_degenerate() {
            return Err(StatsError::DegenerateFeature { index });
        }

        Ok(Self {
            mean: stats.mean,
            std_dev: stats.std_dev,
        })
    }

    /// Map a raw value to its z-score
    pub fn transform(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// Map a z-score back to the raw value
    pub fn inverse(&self, z: f64) -> f64 {
        z * self.std_dev + self.mean
    }
}

/// Per-feature standard scaler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    scales: Vec<FeatureScale>,
}

impl StandardScaler {
    /// Fit on column-major data: `columns[i]` holds every value of feature `i`
    ///
    /// All columns must have the same non-zero length. Fails on the first
    /// constant or non-finite column.
    pub fn fit(columns: &[&[f64]]) -> StatsResult<Self> {
        let rows = columns.first().map(|c| c.len()).ok_or(StatsError::Empty)?;

        let scales = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if column.len() != rows {
                    return Err(StatsError::DimensionMismatch {
                        expected: rows,
                        actual: column.len(),
                    });
                }
                FeatureScale::fit(column, index)
            })
            .collect::<StatsResult<Vec<_>>>()?;

        Ok(Self { scales })
    }

    /// Build a scaler from previously fitted scales
    pub fn from_scales(scales: Vec<FeatureScale>) -> Self {
        Self { scales }
    }

    pub fn scales(&self) -> &[FeatureScale] {
        &self.scales
    }

    pub fn num_features(&self) -> usize {
        self.scales.len()
    }

    /// Standardize one row
    pub fn transform_row(&self, row: &[f64]) -> StatsResult<Vec<f64>> {
        self.check_width(row)?;
        Ok(row
            .iter()
            .zip(&self.scales)
            .map(|(&x, scale)| scale.transform(x))
            .collect())
    }

    /// Undo standardization of one row
    pub fn inverse_row(&self, row: &[f64]) -> StatsResult<Vec<f64>> {
        self.check_width(row)?;
        Ok(row
            .iter()
            .zip(&self.scales)
            .map(|(&z, scale)| scale.inverse(z))
            .collect())
    }

    fn check_width(&self, row: &[f64]) -> StatsResult<()> {
        if row.len() != self.scales.len() {
            return Err(StatsError::DimensionMismatch {
                expected: self.scales.len(),
                actual: row.len(),
            });
        }
        Ok(())
    }
}
