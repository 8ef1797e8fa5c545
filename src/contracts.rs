// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance invariants.
//!
//! Debug-mode assertions on every result the crate hands back. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Catch a broken DP at the point it produces a bad value
//!
//! | Contract                  | Property                                   |
//! |---------------------------|--------------------------------------------|
//! | `check_distance_bounds`   | `\|n - m\| <= d <= max(n, m)`              |
//! | `check_normalized_range`  | `0.0 <= r <= 1.0`                          |
//! | `check_batch_shape`       | one output slot per candidate              |

// ============================================================================
// PAIRWISE CONTRACTS
// ============================================================================

/// Check that a distance respects the unit-cost bounds.
///
/// The length gap needs at least that many insertions or deletions; the longer
/// length is always enough (substitute the overlap, insert the rest).
///
/// # Panics (debug builds only)
/// Panics if `dist` falls outside `[|n - m|, max(n, m)]`.
#[inline]
pub fn check_distance_bounds(dist: usize, n: usize, m: usize) {
    debug_assert!(
        dist >= n.abs_diff(m),
        "Contract violation: distance {} below length gap |{} - {}|",
        dist,
        n,
        m
    );
    debug_assert!(
        dist <= n.max(m),
        "Contract violation: distance {} above longer length max({}, {})",
        dist,
        n,
        m
    );
}

/// Check that a normalized distance lies in the unit interval.
#[inline]
pub fn check_normalized_range(ratio: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&ratio),
        "Contract violation: normalized distance {} outside [0, 1]",
        ratio
    );
}

// ============================================================================
// BATCH CONTRACTS
// ============================================================================

/// Check that a batch produced exactly one result per candidate.
#[inline]
pub fn check_batch_shape(results: usize, candidates: usize) {
    debug_assert_eq!(
        results, candidates,
        "Contract violation: batch returned {} results for {} candidates",
        results, candidates
    );
}
