// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Conversion errors raised before any DP work starts.
//!
//! Every failure in this crate means the same thing: some input could not be
//! read as an ordered sequence of symbols that compare equal to the symbols on
//! the other side. Empty sequences are never an error.

use thiserror::Error;

/// What kind of host value was seen where a sequence or symbol was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    List,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

/// Equality class of a single symbol. Symbols only compare within a class.
///
/// Integers and floats share `Number` and compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Char,
    Number,
    Bool,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SymbolKind::Char => "char",
            SymbolKind::Number => "number",
            SymbolKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// An input could not be treated as an ordered sequence of comparable symbols.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeConversionError {
    /// The value itself is a scalar (or null), not a sequence.
    #[error("expected a sequence, found {found}")]
    NotASequence { found: ValueKind },

    /// A sequence member cannot act as a single symbol.
    #[error("element {index} is not a symbol (found {found})")]
    NotASymbol { index: usize, found: ValueKind },

    /// One sequence mixes symbols with no equality between them.
    #[error("element {index} is a {found} symbol in a sequence of {expected} symbols")]
    MixedSymbols {
        index: usize,
        expected: SymbolKind,
        found: SymbolKind,
    },

    /// The two sequences hold symbols of different kinds.
    #[error("cannot compare {left} symbols with {right} symbols")]
    Incomparable { left: SymbolKind, right: SymbolKind },

    /// A batch candidate failed conversion; `index` is its position in the batch.
    #[error("candidate {index}: {source}")]
    Candidate {
        index: usize,
        #[source]
        source: Box<TypeConversionError>,
    },
}

impl TypeConversionError {
    /// Attach the position of the offending batch candidate.
    pub(crate) fn at_candidate(self, index: usize) -> Self {
        TypeConversionError::Candidate {
            index,
            source: Box::new(self),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TypeConversionError>;
