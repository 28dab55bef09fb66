//! Cosine similarity between feature vectors

use crate::error::{StatsError, StatsResult};

/// Euclidean (L2) norm of a vector
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Dot product of two equal-length vectors
pub fn dot(a: &[f64], b: &[f64]) -> StatsResult<f64> {
    if a.len() != b.len() {
        return Err(StatsError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`, in `[-1, 1]`
///
/// Fails with [`StatsError::ZeroMagnitude`] when either vector is all zeros.
/// The result is clamped to `[-1, 1]` to absorb rounding on parallel vectors.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> StatsResult<f64> {
    let dot = dot(a, b)?;
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(StatsError::ZeroMagnitude);
    }

    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_direction() {
        let sim = cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]).unwrap();
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_and_orthogonal() {
        let opposite = cosine_similarity(&[1.0, -1.0], &[-1.0, 1.0]).unwrap();
        assert!((opposite + 1.0).abs() < 1e-12);

        let orthogonal = cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]).unwrap();
        assert!(orthogonal.abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(
            cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]),
            Err(StatsError::ZeroMagnitude)
        );
        assert_eq!(
            cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]),
            Err(StatsError::ZeroMagnitude)
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        assert!(matches!(
            cosine_similarity(&[1.0], &[1.0, 2.0]),
            Err(StatsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_magnitude_insensitive() {
        let a = cosine_similarity(&[3.0, 4.0], &[1.0, 1.0]).unwrap();
        let b = cosine_similarity(&[300.0, 400.0], &[1.0, 1.0]).unwrap();
        assert!((a - b).abs() < 1e-12);
        assert_eq!(l2_norm(&[3.0, 4.0]), 5.0);
    }
}
