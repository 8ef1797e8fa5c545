//! Differential testing: compare the rolling-row engine against oracles.
//!
//! Two independent references: the full-table recurrence in
//! `osa_distance::testing`, and `strsim::osa_distance`. If the engine
//! disagrees with either, the oracle is right.

use super::common::{ascii_word, int_sequence, small_alphabet_word, unicode_word};
use osa_distance::testing::{chars, naive_osa};
use osa_distance::{distance, osa_distance, OsaBuffer};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Engine matches the full-table recurrence on dense alphabets.
    #[test]
    fn diff_engine_vs_full_table(a in small_alphabet_word(), b in small_alphabet_word()) {
        let (a, b) = (chars(&a), chars(&b));
        prop_assert_eq!(osa_distance(&a, &b), naive_osa(&a, &b));
    }

    /// Engine matches the full-table recurrence on integer sequences.
    #[test]
    fn diff_ints_vs_full_table(a in int_sequence(), b in int_sequence()) {
        prop_assert_eq!(distance(&a, &b).unwrap(), naive_osa(&a, &b));
    }

    /// Engine matches strsim's OSA implementation.
    #[test]
    fn diff_engine_vs_strsim(a in ascii_word(), b in ascii_word()) {
        prop_assert_eq!(distance(&a, &b).unwrap(), strsim::osa_distance(&a, &b));
    }

    /// Unicode inputs agree with strsim, which also counts chars.
    #[test]
    fn diff_unicode_vs_strsim(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(distance(&a, &b).unwrap(), strsim::osa_distance(&a, &b));
    }

    /// A reused buffer gives the same answers as fresh ones.
    #[test]
    fn diff_reused_buffer(pairs in prop::collection::vec((small_alphabet_word(), small_alphabet_word()), 1..10)) {
        let mut buffer = OsaBuffer::new();
        for (a, b) in &pairs {
            let (a, b) = (chars(a), chars(b));
            prop_assert_eq!(buffer.distance(&a, &b), naive_osa(&a, &b));
        }
    }
}
