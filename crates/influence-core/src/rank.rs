//! Similarity ranking
//!
//! Scores every catalog row by cosine similarity to the projected query
//! and returns the best `top_n`. The catalog is only borrowed; each call
//! builds its own scored list, so concurrent calls on a shared catalog are
//! safe.

use std::cmp::Ordering;

use influence_stats::{cosine_similarity, l2_norm, StatsError};

use crate::error::{RecommendError, Result};
use crate::record::{InfluencerRecord, Query};
use crate::standardize::{StandardizedCatalog, StandardizedRecord};

pub use crate::config::DEFAULT_TOP_N;

/// One scored catalog row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch<'a> {
    /// Position of the row in the catalog
    pub index: usize,
    pub record: &'a InfluencerRecord,
    pub similarity: f64,
}

/// Rank catalog rows by similarity to a raw query
///
/// The query is projected with the catalog's own scaling parameters before
/// comparison. Results are sorted by descending similarity; equal scores
/// keep catalog order. At most `min(top_n, catalog.len())` rows are
/// returned.
///
/// A query that projects onto the catalog mean has no direction, so its
/// similarity to every row is undefined and the call fails. A row that sits
/// exactly on the mean scores 0.
pub fn rank<'a>(
    query: &Query,
    catalog: &'a StandardizedCatalog,
    top_n: usize,
) -> Result<Vec<RankedMatch<'a>>> {
    query.validate()?;

    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }

    let projected = catalog.params().project(query);
    if l2_norm(&projected) == 0.0 {
        return Err(RecommendError::UndefinedSimilarity {
            reason: "query equals the catalog mean and has no direction".to_string(),
        });
    }

    let mut scored = score_rows(&projected, catalog.rows())?;

    // sort_by is stable, so ties keep catalog order
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(top_n);

    Ok(scored)
}

#[cfg(not(feature = "parallel"))]
fn score_rows<'a>(
    projected: &[f64; 2],
    rows: &'a [StandardizedRecord],
) -> Result<Vec<RankedMatch<'a>>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| score_row(projected, index, row))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_rows<'a>(
    projected: &[f64; 2],
    rows: &'a [StandardizedRecord],
) -> Result<Vec<RankedMatch<'a>>> {
    use rayon::prelude::*;

    rows.par_iter()
        .enumerate()
        .map(|(index, row)| score_row(projected, index, row))
        .collect()
}

fn score_row<'a>(
    projected: &[f64; 2],
    index: usize,
    row: &'a StandardizedRecord,
) -> Result<RankedMatch<'a>> {
    let similarity = match cosine_similarity(projected, &row.features) {
        Ok(similarity) => similarity,
        Err(StatsError::ZeroMagnitude) => 0.0,
        Err(other) => {
            return Err(RecommendError::UndefinedSimilarity {
                reason: format!("row {} ('{}'): {}", index, row.record.username, other),
            })
        }
    };

    if !similarity.is_finite() {
        return Err(RecommendError::UndefinedSimilarity {
            reason: format!(
                "row {} ('{}') has a non-finite score",
                index, row.record.username
            ),
        });
    }

    Ok(RankedMatch {
        index,
        record: &row.record,
        similarity,
    })
}
