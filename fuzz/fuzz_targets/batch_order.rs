// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for batch dispatch.
//!
//! Parallel execution must never reorder or drop results: slot `i` always
//! holds the pairwise distance for candidate `i`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use osa_distance::{distance, distance_batch_with, BatchConfig};

#[derive(Debug, Arbitrary)]
struct BatchInput {
    reference: String,
    candidates: Vec<String>,
    min_parallel_len: u8,
}

fuzz_target!(|input: BatchInput| {
    // Cap sizes to avoid timeouts
    let reference: String = input.reference.chars().take(32).collect();
    let candidates: Vec<String> = input
        .candidates
        .iter()
        .take(64)
        .map(|c| c.chars().take(32).collect())
        .collect();

    let config = BatchConfig {
        parallel: true,
        min_parallel_len: usize::from(input.min_parallel_len),
    };
    let results = distance_batch_with(&reference, &candidates, &config).expect("text always converts");

    assert_eq!(results.len(), candidates.len());
    for (i, candidate) in candidates.iter().enumerate() {
        assert_eq!(
            results[i],
            distance(&reference, candidate).expect("text always converts"),
            "slot {} reference={:?} candidate={:?}",
            i,
            reference,
            candidate
        );
    }
});
