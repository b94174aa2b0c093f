//! Property tests for interval merging and overlap arithmetic

use proptest::prelude::*;
use std::collections::HashSet;
use surzhyk_core::{intervals_overlap, merge_intervals};

/// Strategy: small intervals with start <= end
fn interval() -> impl Strategy<Value = (usize, usize)> {
    (0usize..64, 0usize..16).prop_map(|(start, len)| (start, start + len))
}

fn interval_set() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec(interval(), 0..24)
}

/// Points covered by a half-open interval set
fn covered_points(intervals: &[(usize, usize)]) -> HashSet<usize> {
    intervals
        .iter()
        .flat_map(|&(start, end)| start..end)
        .collect()
}

proptest! {
    #[test]
    fn merge_is_idempotent(intervals in interval_set()) {
        let once = merge_intervals(&intervals);
        let twice = merge_intervals(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_preserves_covered_points(intervals in interval_set()) {
        let merged = merge_intervals(&intervals);
        prop_assert_eq!(covered_points(&intervals), covered_points(&merged));
    }

    #[test]
    fn merge_output_is_ordered_and_disjoint(intervals in interval_set()) {
        let merged = merge_intervals(&intervals);
        for pair in merged.windows(2) {
            // Strictly increasing starts, and a gap between intervals:
            // touching intervals would have been coalesced
            prop_assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn overlap_is_symmetric(a in interval(), b in interval()) {
        prop_assert_eq!(intervals_overlap(a, b), intervals_overlap(b, a));
    }

    #[test]
    fn overlap_matches_pointwise_definition(a in interval(), b in interval()) {
        // Inclusive bounds: compare against closed point sets
        let a_points: HashSet<usize> = (a.0..=a.1).collect();
        let b_points: HashSet<usize> = (b.0..=b.1).collect();
        let shares_point = !a_points.is_disjoint(&b_points);
        prop_assert_eq!(intervals_overlap(a, b), shares_point);
    }
}
