//! Shared test utilities for integration tests.
//!
//! Proptest strategies and small helpers. Not every test binary uses every
//! helper.

#![allow(dead_code)]

use proptest::prelude::*;

/// Short words over a tiny alphabet, so transpositions and repeats are common.
pub fn small_alphabet_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,10}").unwrap()
}

/// ASCII words of the sort a spell checker would see.
pub fn ascii_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,16}").unwrap()
}

/// Words that mix precomposed and multi-byte characters.
pub fn unicode_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "naïve".to_string(),
        "résumé".to_string(),
        "Sjöstedt".to_string(),
        "Sjostedt".to_string(),
        "tōkyō".to_string(),
        "తెలుగు".to_string(),
        "hello".to_string(),
        String::new(),
    ])
}

/// Integer sequences with a small value range.
pub fn int_sequence() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..5, 0..12)
}

/// Apply one adjacent swap at `at` (wrapped into range); identity for short inputs.
pub fn swap_adjacent(s: &str, at: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.len() >= 2 {
        let i = at % (chars.len() - 1);
        chars.swap(i, i + 1);
    }
    chars.into_iter().collect()
}
