//! Test utilities shared across unit tests, integration tests and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical reference implementation and fixtures so every
//! suite checks against the same ground truth.

#![doc(hidden)]

/// Reference words from the weekday example.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Expected OSA distances from "Saturday" to each of [`WEEKDAYS`].
pub const SATURDAY_DISTANCES: [usize; 7] = [3, 5, 5, 6, 4, 5, 0];

/// Full-table OSA distance, straight from the recurrence.
///
/// O(n·m) memory with no short-circuits or row rotation. Slow but obviously
/// correct; the optimized engine is checked against it.
pub fn naive_osa<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut d = vec![vec![0usize; m + 1]; n + 1];

    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }

    d[n][m]
}

/// Split text into chars for slice-level APIs.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
