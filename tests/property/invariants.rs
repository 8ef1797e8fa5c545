//! Algebraic properties of the OSA distance.

use super::common::{ascii_word, int_sequence, small_alphabet_word, swap_adjacent, unicode_word};
use osa_distance::{distance, normalized_distance, osa_distance_within, testing::chars};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// distance(s, s) == 0
    #[test]
    fn prop_identity(s in ascii_word()) {
        prop_assert_eq!(distance(&s, &s).unwrap(), 0);
    }

    /// distance(a, b) == distance(b, a)
    #[test]
    fn prop_symmetry(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
    }

    /// Symmetry holds for generic sequences too.
    #[test]
    fn prop_symmetry_ints(a in int_sequence(), b in int_sequence()) {
        prop_assert_eq!(distance(&a, &b).unwrap(), distance(&b, &a).unwrap());
    }

    /// |len(a) - len(b)| <= distance(a, b) <= max(len(a), len(b))
    #[test]
    fn prop_length_bounds(a in unicode_word(), b in unicode_word()) {
        let n = a.chars().count();
        let m = b.chars().count();
        let d = distance(&a, &b).unwrap();
        prop_assert!(d >= n.abs_diff(m), "{} < gap for {:?} {:?}", d, a, b);
        prop_assert!(d <= n.max(m), "{} > max for {:?} {:?}", d, a, b);
    }

    /// An empty side costs the other side's length.
    #[test]
    fn prop_empty_base_case(s in unicode_word()) {
        prop_assert_eq!(distance("", &s).unwrap(), s.chars().count());
        prop_assert_eq!(distance(&s, "").unwrap(), s.chars().count());
    }

    /// One adjacent swap of distinct symbols costs exactly 1.
    #[test]
    fn prop_single_transposition(s in small_alphabet_word(), at in 0usize..16) {
        let swapped = swap_adjacent(&s, at);
        let d = distance(&s, &swapped).unwrap();
        if swapped == s {
            prop_assert_eq!(d, 0);
        } else {
            prop_assert_eq!(d, 1);
        }
    }

    /// Normalized distance is the raw distance over the longer length, in [0, 1].
    #[test]
    fn prop_normalized_definition(a in ascii_word(), b in ascii_word()) {
        let r = normalized_distance(&a, &b).unwrap();
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!((0.0..=1.0).contains(&r));
        if longest == 0 {
            prop_assert_eq!(r, 0.0);
        } else {
            let d = distance(&a, &b).unwrap();
            prop_assert_eq!(r, d as f64 / longest as f64);
        }
    }

    /// The bounded form agrees with the exact distance at every cutoff.
    #[test]
    fn prop_bounded_agrees(a in small_alphabet_word(), b in small_alphabet_word(), max in 0usize..12) {
        let exact = distance(&a, &b).unwrap();
        let bounded = osa_distance_within(&chars(&a), &chars(&b), max);
        prop_assert_eq!(bounded, (exact <= max).then_some(exact));
    }
}
