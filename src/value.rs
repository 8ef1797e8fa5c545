// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dynamically typed inputs.
//!
//! Hosts that hand over loosely typed data (JSON payloads, scripting-language
//! values) describe each input as a [`Value`]. Conversion to symbols happens
//! once, up front: text becomes `Char` atoms, list members become one atom each,
//! and anything else is rejected with a [`TypeConversionError`] before the DP
//! runs.
//!
//! ```
//! use osa_distance::{distance, Value};
//!
//! let a = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
//! let b = Value::List(vec![Value::Int(1), Value::Int(3), Value::Int(2)]);
//! assert_eq!(distance(&a, &b).unwrap(), 1);
//!
//! let text = Value::Text("123".into());
//! assert!(distance(&a, &text).is_err());
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SymbolKind, TypeConversionError, ValueKind};
use crate::sequence::{Sequence, Symbol};

/// A host value that may or may not be a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Read this value as one symbol, if it is one.
    ///
    /// Scalars map directly; a text of exactly one code point is a `Char`.
    fn as_atom(&self) -> Option<Atom> {
        match self {
            Value::Bool(v) => Some(Atom::Bool(*v)),
            Value::Int(v) => Some(Atom::Int(*v)),
            Value::Float(v) => Some(Atom::Float(*v)),
            Value::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Atom::Char(c)),
                    _ => None,
                }
            }
            Value::Null | Value::List(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

/// One symbol of a dynamically typed sequence.
///
/// `Int` and `Float` are both numbers: an integer equals a float holding
/// exactly the same value. Two floats compare by `total_cmp`, so a `NaN`
/// equals a `NaN` with the same sign and payload bits, and identical sequences
/// always sit at distance 0.
#[derive(Debug, Clone, Copy)]
pub enum Atom {
    Char(char),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl Atom {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Atom::Char(_) => SymbolKind::Char,
            Atom::Int(_) | Atom::Float(_) => SymbolKind::Number,
            Atom::Bool(_) => SymbolKind::Bool,
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Char(a), Atom::Char(b)) => a == b,
            (Atom::Int(a), Atom::Int(b)) => a == b,
            (Atom::Bool(a), Atom::Bool(b)) => a == b,
            (Atom::Float(a), Atom::Float(b)) => a.total_cmp(b) == Ordering::Equal,
            (Atom::Int(i), Atom::Float(f)) | (Atom::Float(f), Atom::Int(i)) => int_equals_float(*i, *f),
            _ => false,
        }
    }
}

/// Exact value equality between an `i64` and an `f64`.
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63 is exact in f64; `as` would saturate it onto i64::MAX.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-UPPER..UPPER).contains(&f) && f as i64 == i
}

/// The single kind shared by all atoms of `atoms`, or `None` if it is empty.
fn uniform_kind(atoms: &[Atom]) -> Result<Option<SymbolKind>> {
    let Some(first) = atoms.first() else {
        return Ok(None);
    };
    let expected = first.kind();
    for (index, atom) in atoms.iter().enumerate().skip(1) {
        let found = atom.kind();
        if found != expected {
            return Err(TypeConversionError::MixedSymbols {
                index,
                expected,
                found,
            });
        }
    }
    Ok(Some(expected))
}

impl Symbol for Atom {
    fn ensure_comparable(left: &[Self], right: &[Self]) -> Result<()> {
        match (uniform_kind(left)?, uniform_kind(right)?) {
            (Some(l), Some(r)) if l != r => Err(TypeConversionError::Incomparable { left: l, right: r }),
            _ => Ok(()),
        }
    }
}

impl Sequence for Value {
    type Symbol = Atom;

    fn to_symbols(&self) -> Result<Cow<'_, [Atom]>> {
        match self {
            Value::Text(s) => Ok(Cow::Owned(s.chars().map(Atom::Char).collect())),
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_atom().ok_or(TypeConversionError::NotASymbol {
                        index,
                        found: item.kind(),
                    })
                })
                .collect::<Result<Vec<Atom>>>()
                .map(Cow::Owned),
            other => Err(TypeConversionError::NotASequence { found: other.kind() }),
        }
    }
}
