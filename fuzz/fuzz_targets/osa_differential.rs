// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the rolling-row OSA engine.
//!
//! Checks the engine against the full-table recurrence, plus the bounds every
//! unit-cost distance must satisfy. A wrong row rotation shows up here first.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use osa_distance::testing::naive_osa;
use osa_distance::{osa_distance, osa_distance_within};

/// Fuzz input for pairwise distance
#[derive(Debug, Arbitrary)]
struct PairInput {
    /// Symbols drawn from a small alphabet so transpositions are frequent
    a: Vec<u8>,
    b: Vec<u8>,
    max: u8,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to keep the O(n·m) oracle fast; fold into a 4-symbol alphabet
    let a: Vec<u8> = input.a.iter().take(64).map(|x| x % 4).collect();
    let b: Vec<u8> = input.b.iter().take(64).map(|x| x % 4).collect();

    let d = osa_distance(&a, &b);

    // INVARIANT 1: agrees with the full table
    assert_eq!(d, naive_osa(&a, &b), "a={:?} b={:?}", a, b);

    // INVARIANT 2: symmetric
    assert_eq!(d, osa_distance(&b, &a), "a={:?} b={:?}", a, b);

    // INVARIANT 3: |n - m| <= d <= max(n, m)
    assert!(d >= a.len().abs_diff(b.len()));
    assert!(d <= a.len().max(b.len()));

    // INVARIANT 4: bounded form agrees at the fuzzed cutoff
    let max = usize::from(input.max % 70);
    assert_eq!(osa_distance_within(&a, &b, max), (d <= max).then_some(d));
});
