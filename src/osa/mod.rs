// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance under the optimal string alignment model.
//!
//! Two entry points here: the full rolling-row DP for exact distances, and a
//! bounded variant that gives up as soon as the cutoff cannot be met.

mod bounded;
mod engine;

pub use bounded::{osa_distance_within, within};
pub use engine::{osa_distance, OsaBuffer};

use crate::error::Result;
use crate::sequence::{prepare, Sequence};

/// OSA edit distance between two sequences.
///
/// Fails with [`TypeConversionError`](crate::TypeConversionError) only when an
/// input cannot be read as symbols comparable with the other side.
///
/// ```
/// use osa_distance::distance;
///
/// assert_eq!(distance("saturday", "sunday").unwrap(), 3);
/// assert_eq!(distance(&[1, 2, 3], &[1, 3, 2]).unwrap(), 1);
/// ```
pub fn distance<A, B>(a: &A, b: &B) -> Result<usize>
where
    A: Sequence + ?Sized,
    B: Sequence<Symbol = A::Symbol> + ?Sized,
{
    let (left, right) = prepare(a, b)?;
    Ok(osa_distance(&left, &right))
}
