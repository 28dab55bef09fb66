//! Summary statistics for a numeric feature
//!
//! Provides the moments the scaler needs plus the range, which is logged
//! when a catalog is standardized.

use serde::{Deserialize, Serialize};

/// Relative tolerance under which a standard deviation is treated as zero
pub const DEGENERATE_TOLERANCE: f64 = 10.0 * f64::EPSILON;

/// Summary statistics for a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of NaN/infinite values that were skipped
    pub missing: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population variance (divides by n)
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            missing,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }

    /// Create empty statistics (all NaN)
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the column is constant (or empty)
    ///
    /// A standard deviation within rounding noise of the mean counts as zero,
    /// so `[0.1, 0.1, 0.1]` is degenerate even though its computed variance
    /// is not exactly 0.
    pub fn is_degenerate(&self) -> bool {
        if self.count == 0 {
            return true;
        }
        self.std_dev <= DEGENERATE_TOLERANCE * self.mean.abs().max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stats_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert!((stats.mean - 5.5).abs() < 1e-10);
        assert!((stats.variance - 8.25).abs() < 1e-10);
    }

    #[test]
    fn test_population_std_dev() {
        // ddof = 0: variance of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 4
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStats::from_data(&data);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_stats_with_nan() {
        let data = vec![1.0, 2.0, f64::NAN, 4.0, f64::INFINITY];
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.missing, 2);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_degenerate() {
        assert!(SummaryStats::from_data(&[3.0, 3.0, 3.0]).is_degenerate());
        assert!(SummaryStats::from_data(&[0.1, 0.1, 0.1]).is_degenerate());
        assert!(SummaryStats::from_data(&[]).is_degenerate());
        assert!(!SummaryStats::from_data(&[1.0, 2.0]).is_degenerate());
    }
}
