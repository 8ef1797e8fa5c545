// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for loosely typed JSON inputs.
//!
//! Arbitrary JSON must either convert and produce a sane distance, or fail
//! with a conversion error. It must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use osa_distance::{distance, normalized_distance, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Two JSON documents separated by a newline
    let Some((left, right)) = text.split_once('\n') else {
        return;
    };
    let (Ok(a), Ok(b)) = (
        serde_json::from_str::<Value>(left),
        serde_json::from_str::<Value>(right),
    ) else {
        return;
    };

    match distance(&a, &b) {
        Ok(d) => {
            // INVARIANT: identity and a normalized value in [0, 1]
            assert_eq!(distance(&a, &a).ok(), Some(0));
            let r = normalized_distance(&a, &b).expect("converted once already");
            assert!((0.0..=1.0).contains(&r), "ratio {} for distance {}", r, d);
        }
        Err(e) => {
            // Errors are deterministic
            assert_eq!(distance(&a, &b).err(), Some(e));
        }
    }
});
