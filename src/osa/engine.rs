// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal string alignment distance via dynamic programming.
//!
//! `D[i][j]` is the cost of turning the first `i` symbols of `a` into the first
//! `j` symbols of `b`. Each cell looks at most two rows back (the transposition
//! case), so three rows are enough: `prev2`, `prev`, `curr`. The rows are sized
//! by the shorter input, which keeps memory at O(min(n, m)) while time stays
//! O(n·m).
//!
//! OSA is the *restricted* transposition model: a symbol takes part in at most
//! one swap. `"ca"` → `"abc"` costs 3 here, not 2 as in unrestricted
//! Damerau-Levenshtein. Downstream scores depend on this exact cost model, and
//! it is why OSA can break the triangle inequality.

use crate::contracts::check_distance_bounds;

/// Reusable rolling rows for repeated OSA computations.
///
/// A batch keeps one of these per worker so the rows are allocated once and
/// only grow when a longer candidate arrives.
#[derive(Debug, Default, Clone)]
pub struct OsaBuffer {
    prev2: Vec<usize>,
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl OsaBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the rows for sequences whose shorter side has `len` symbols.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            prev2: Vec::with_capacity(len + 1),
            prev: Vec::with_capacity(len + 1),
            curr: Vec::with_capacity(len + 1),
        }
    }

    /// OSA distance between `a` and `b`, reusing this buffer's rows.
    pub fn distance<T: PartialEq>(&mut self, a: &[T], b: &[T]) -> usize {
        // Identical inputs: slice equality compares lengths first, then at
        // most min(n, m) symbols, and skips the table entirely.
        if a == b {
            return 0;
        }
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        // OSA is symmetric, so the shorter side can always be the row.
        let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let dist = self.run(outer, inner);
        check_distance_bounds(dist, a.len(), b.len());
        dist
    }

    fn run<T: PartialEq>(&mut self, outer: &[T], inner: &[T]) -> usize {
        let n = outer.len();
        let m = inner.len();

        self.reset(m);
        let Self { prev2, prev, curr } = self;

        for i in 1..=n {
            curr[0] = i;
            let a_i = &outer[i - 1];
            for j in 1..=m {
                let b_j = &inner[j - 1];
                let cost = usize::from(a_i != b_j);

                let mut best = (prev[j] + 1) // deletion
                    .min(curr[j - 1] + 1) // insertion
                    .min(prev[j - 1] + cost); // match or substitution

                if i > 1 && j > 1 && *a_i == inner[j - 2] && outer[i - 2] == *b_j {
                    best = best.min(prev2[j - 2] + 1); // adjacent transposition
                }
                curr[j] = best;
            }
            // prev2 <- prev, prev <- curr; the old prev2 becomes scratch.
            std::mem::swap(prev2, prev);
            std::mem::swap(prev, curr);
        }

        prev[m]
    }

    fn reset(&mut self, m: usize) {
        self.prev2.clear();
        self.prev2.resize(m + 1, 0);
        self.prev.clear();
        self.prev.extend(0..=m);
        self.curr.clear();
        self.curr.resize(m + 1, 0);
    }
}

/// OSA distance between two symbol slices.
///
/// Allocates a fresh buffer; use [`OsaBuffer`] when comparing many pairs.
///
/// ```
/// use osa_distance::osa_distance;
///
/// let a: Vec<char> = "smtih".chars().collect();
/// let b: Vec<char> = "smith".chars().collect();
/// assert_eq!(osa_distance(&a, &b), 1);
/// ```
pub fn osa_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    OsaBuffer::new().distance(a, b)
}
