// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text to symbol helpers.
//!
//! The engine compares code points exactly and never normalizes. A visually
//! identical string can be spelled with different code points ("é" as one
//! precomposed scalar, or "e" plus a combining acute), and those spellings are
//! at a nonzero distance. Callers who want them equal run both inputs through
//! the same form here first.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Split text into code points, one symbol each.
pub fn code_points(value: &str) -> Vec<char> {
    value.chars().collect()
}

/// Canonical decomposition (NFD): base characters followed by combining marks
/// in canonical order.
///
/// - "é" → ['e', '\u{301}']
/// - "q\u{307}\u{323}" → ['q', '\u{323}', '\u{307}'] (marks reordered)
#[cfg(feature = "unicode-normalization")]
pub fn decompose(value: &str) -> Vec<char> {
    value.nfd().collect()
}

/// Canonical composition (NFC): precomposed characters where they exist.
#[cfg(feature = "unicode-normalization")]
pub fn compose(value: &str) -> Vec<char> {
    value.nfc().collect()
}
