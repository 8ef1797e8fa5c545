// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the OSA distance kernel.
//!
//! This standalone crate extracts the rolling-row DP and proves its properties
//! exhaustively for every input up to a small length bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the three-row DP never indexes out of bounds
//! 2. **Agreement**: rolling rows equal the full-table recurrence
//! 3. **Identity**: distance(a, a) == 0
//! 4. **Symmetry**: distance(a, b) == distance(b, a)
//! 5. **Bounds**: |n - m| <= distance <= max(n, m)

/// Longest input the proofs range over.
pub const MAX_LEN: usize = 4;

// ============================================================================
// OSA KERNEL (copied from src/osa/engine.rs)
// ============================================================================

/// OSA distance with three rolling rows.
pub fn osa_distance(a: &[u8], b: &[u8]) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = outer.len();
    let m = inner.len();

    let mut prev2 = vec![0usize; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=n {
        curr[0] = i;
        for j in 1..=m {
            let cost = usize::from(outer[i - 1] != inner[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && outer[i - 1] == inner[j - 2] && outer[i - 2] == inner[j - 1] {
                best = best.min(prev2[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

/// Full-table recurrence on a fixed-size grid.
pub fn osa_full_table(a: &[u8], b: &[u8]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut d = [[0usize; MAX_LEN + 1]; MAX_LEN + 1];

    for i in 0..=n {
        d[i][0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (d[i - 1][j] + 1).min(d[i][j - 1] + 1).min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[i - 2][j - 2] + 1);
            }
            d[i][j] = best;
        }
    }
    d[n][m]
}

// ============================================================================
// KANI PROOFS
// ============================================================================

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Symbolic sequence of length <= MAX_LEN over a 3-symbol alphabet.
    fn any_sequence() -> Vec<u8> {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut seq = Vec::with_capacity(len);
        for _ in 0..len {
            seq.push(kani::any_where(|&x: &u8| x < 3));
        }
        seq
    }

    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_rolling_rows_match_full_table() {
        let a = any_sequence();
        let b = any_sequence();
        kani::assert(
            osa_distance(&a, &b) == osa_full_table(&a, &b),
            "rolling rows must equal the full table",
        );
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_identity() {
        let a = any_sequence();
        kani::assert(osa_distance(&a, &a) == 0, "distance(a, a) must be 0");
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_symmetry() {
        let a = any_sequence();
        let b = any_sequence();
        kani::assert(
            osa_distance(&a, &b) == osa_distance(&b, &a),
            "distance must be symmetric",
        );
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_bounds() {
        let a = any_sequence();
        let b = any_sequence();
        let d = osa_distance(&a, &b);
        kani::assert(d >= a.len().abs_diff(b.len()), "distance below length gap");
        kani::assert(d <= a.len().max(b.len()), "distance above longer length");
    }
}
