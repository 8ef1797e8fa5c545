// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! OSA distance with a cutoff.
//!
//! Two early exits, both sound:
//! 1. `|len(a) - len(b)|` is a lower bound on the distance, so a length gap
//!    above `max` rejects before allocating anything.
//! 2. A cell in row `i` reads row `i-1` (cost 0 or 1) and row `i-2` (cost 1),
//!    so once two consecutive row minima both exceed `max`, every later row
//!    does too and the DP can be abandoned.

use std::borrow::Cow;

use crate::error::Result;
use crate::sequence::{prepare, Sequence};

/// `Some(d)` when the OSA distance `d` is at most `max`, `None` otherwise.
///
/// Agrees with [`osa_distance`](crate::osa_distance) whenever it returns `Some`.
pub fn osa_distance_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        return Some(a.len().max(b.len()));
    }

    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = outer.len();
    let m = inner.len();

    let mut prev2 = vec![0usize; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];
    // Row 0 has minimum 0; there is no row -1.
    let mut prev_min = 0usize;

    for i in 1..=n {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=m {
            let cost = usize::from(outer[i - 1] != inner[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && outer[i - 1] == inner[j - 2] && outer[i - 2] == inner[j - 1] {
                best = best.min(prev2[j - 2] + 1);
            }
            curr[j] = best;
            row_min = row_min.min(best);
        }

        if row_min > max && prev_min > max {
            return None;
        }
        prev_min = row_min;

        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    Some(prev[m]).filter(|&d| d <= max)
}

/// Are `a` and `b` within `max` OSA edits of each other?
///
/// ```
/// use osa_distance::within;
///
/// assert!(within("smtih", "smith", 1).unwrap());
/// assert!(!within("orange", "pumpkin", 6).unwrap());
/// ```
pub fn within<A, B>(a: &A, b: &B, max: usize) -> Result<bool>
where
    A: Sequence + ?Sized,
    B: Sequence<Symbol = A::Symbol> + ?Sized,
{
    let (left, right): (Cow<'_, [A::Symbol]>, Cow<'_, [A::Symbol]>) = prepare(a, b)?;
    Ok(osa_distance_within(&left, &right, max).is_some())
}
