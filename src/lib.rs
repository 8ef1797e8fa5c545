// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal string alignment (restricted Damerau-Levenshtein) edit distance.
//!
//! The distance between two sequences is the fewest single-symbol insertions,
//! deletions, substitutions, or adjacent transpositions that turn one into the
//! other, where no symbol takes part in more than one transposition.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ sequence.rs  │────▶│ osa/engine.rs│────▶│  batch.rs    │
//! │ value.rs     │     │ osa/bounded  │     │ (rayon map,  │
//! │ (symbols,    │     │ (rolling-row │     │  indexed     │
//! │  validation) │     │  DP)         │     │  collect)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌─────────────────────────────────┐
//!                      │          normalize.rs           │
//!                      │   distance / max(len_a, len_b)  │
//!                      └─────────────────────────────────┘
//! ```
//!
//! # Operations
//!
//! | Function                      | Result                                 |
//! |-------------------------------|----------------------------------------|
//! | [`distance`]                  | `usize` OSA distance                   |
//! | [`normalized_distance`]       | `f64` in [0, 1]                        |
//! | [`distance_batch`]            | one distance per candidate, in order   |
//! | [`normalized_distance_batch`] | one ratio per candidate, in order      |
//!
//! # Usage
//!
//! ```
//! use osa_distance::{distance, distance_batch, normalized_distance};
//!
//! assert_eq!(distance("smtih", "smith").unwrap(), 1);
//! assert_eq!(normalized_distance("saturday", "sunday").unwrap(), 0.375);
//!
//! let days = ["Sunday", "Monday", "Saturday"];
//! assert_eq!(distance_batch("Saturday", &days).unwrap(), vec![3, 5, 0]);
//! ```
//!
//! Text is compared one code point at a time. Nothing is case-folded or
//! Unicode-normalized; see [`text`] for helpers that canonicalize inputs first.

// Module declarations
pub mod batch;
pub mod contracts;
mod error;
mod normalize;
mod osa;
mod sequence;
pub mod text;
mod value;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use batch::{
    distance_batch, distance_batch_with, normalized_distance_batch,
    normalized_distance_batch_with, BatchConfig,
};
pub use error::{Result, SymbolKind, TypeConversionError, ValueKind};
pub use normalize::{normalize, normalized_distance};
pub use osa::{distance, osa_distance, osa_distance_within, within, OsaBuffer};
pub use sequence::{Sequence, Symbol};
pub use value::{Atom, Value};
