//! Property-based tests for ranking

mod common;

use common::fixtures::standardized;
use influence_core::{rank, recommend, Query};
use proptest::prelude::*;

/// Rows with varied follower counts and engagement rates
fn catalog_rows() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((1_000.0f64..5.0e7, 0.001f64..1.5), 3..40)
}

fn named(rows: &[(f64, f64)]) -> Vec<(String, f64, f64)> {
    rows.iter()
        .enumerate()
        .map(|(i, &(followers, rate))| (format!("user_{}", i), followers, followers * rate))
        .collect()
}

fn as_fixture(rows: &[(String, f64, f64)]) -> Vec<(&str, f64, f64)> {
    rows.iter()
        .map(|(name, followers, views)| (name.as_str(), *followers, *views))
        .collect()
}

proptest! {
    #[test]
    fn never_more_than_top_n_or_catalog_size(
        rows in catalog_rows(),
        top_n in 0usize..60,
        followers in 0.0f64..1.0e8,
        rate in 0.0f64..2.0,
    ) {
        let rows = named(&rows);
        let catalog = standardized(&as_fixture(&rows));
        if let Ok(results) = recommend(Query::new(followers, rate), &catalog, top_n) {
            prop_assert!(results.len() <= top_n);
            prop_assert!(results.len() <= catalog.len());
            prop_assert_eq!(results.len(), top_n.min(catalog.len()));
        }
    }

    #[test]
    fn ranking_is_idempotent(
        rows in catalog_rows(),
        followers in 0.0f64..1.0e8,
        rate in 0.0f64..2.0,
    ) {
        let rows = named(&rows);
        let catalog = standardized(&as_fixture(&rows));
        let query = Query::new(followers, rate);

        let first = recommend(query, &catalog, 10);
        let second = recommend(query, &catalog, 10);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "repeat call changed outcome"),
        }
    }

    #[test]
    fn output_sorted_with_stable_ties(
        rows in catalog_rows(),
        followers in 0.0f64..1.0e8,
        rate in 0.0f64..2.0,
    ) {
        let rows = named(&rows);
        let catalog = standardized(&as_fixture(&rows));

        if let Ok(ranked) = rank(&Query::new(followers, rate), &catalog, catalog.len()) {
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].similarity >= pair[1].similarity);
                if pair[0].similarity == pair[1].similarity {
                    prop_assert!(pair[0].index < pair[1].index);
                }
            }
        }
    }

    #[test]
    fn scores_invariant_under_row_permutation(
        rows in catalog_rows(),
        followers in 0.0f64..1.0e8,
        rate in 0.0f64..2.0,
        seed in any::<u64>(),
    ) {
        let rows = named(&rows);
        let mut shuffled = rows.clone();
        // deterministic Fisher-Yates driven by the seed
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let original = standardized(&as_fixture(&rows));
        let permuted = standardized(&as_fixture(&shuffled));
        let query = Query::new(followers, rate);

        let a = recommend(query, &original, rows.len());
        let b = recommend(query, &permuted, rows.len());
        if let (Ok(a), Ok(b)) = (a, b) {
            prop_assert_eq!(a.len(), b.len());
            for rec in &a {
                let other = b.iter().find(|r| r.username == rec.username).unwrap();
                prop_assert!(
                    (rec.similarity - other.similarity).abs() < 1e-9,
                    "{}: {} vs {}",
                    rec.username,
                    rec.similarity,
                    other.similarity
                );
            }
        }
    }
}
