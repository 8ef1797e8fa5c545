// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Length-normalized distance.
//!
//! Unit costs bound the OSA distance by the longer length, so dividing by it
//! lands in [0, 1]: 0 for identical inputs, 1 when nothing lines up.

use crate::contracts::check_normalized_range;
use crate::error::Result;
use crate::osa::osa_distance;
use crate::sequence::{prepare, Sequence};

/// Scale a raw distance by the longer of the two lengths.
///
/// Two empty sequences are at `0.0`; there is nothing to divide by.
pub fn normalize(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let longest = len_a.max(len_b);
    if longest == 0 {
        return 0.0;
    }
    let ratio = distance as f64 / longest as f64;
    check_normalized_range(ratio);
    ratio
}

/// OSA distance divided by `max(len(a), len(b))`.
///
/// ```
/// use osa_distance::normalized_distance;
///
/// assert_eq!(normalized_distance("saturday", "sunday").unwrap(), 0.375);
/// assert_eq!(normalized_distance("", "").unwrap(), 0.0);
/// ```
pub fn normalized_distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Sequence + ?Sized,
    B: Sequence<Symbol = A::Symbol> + ?Sized,
{
    let (left, right) = prepare(a, b)?;
    let dist = osa_distance(&left, &right);
    Ok(normalize(dist, left.len(), right.len()))
}
