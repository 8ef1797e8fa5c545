// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one sequence abstraction every operation goes through.
//!
//! Container kinds are adapted here, at the boundary, so the DP only ever sees
//! two slices of the same symbol type. Text is decoded to `char`s (code points,
//! never bytes); slices and vectors are borrowed as-is.
//!
//! A slice, a fixed-size array and a `Vec` of the same symbol type are all
//! valid on either side of a comparison:
//!
//! ```
//! use osa_distance::distance;
//!
//! assert_eq!(distance(&[1, 2, 3], &vec![1, 3, 2]).unwrap(), 1);
//! assert_eq!(distance("smtih", &String::from("smith")).unwrap(), 1);
//! ```

use std::borrow::Cow;

use crate::error::Result;

/// A single comparable unit of a sequence.
///
/// Statically typed symbols are always comparable, so the default check passes.
/// Dynamically typed symbols override [`Symbol::ensure_comparable`] to reject
/// pairs with no defined equality before any DP work happens.
pub trait Symbol: PartialEq + Clone + Send + Sync {
    /// Verify that every symbol of `left` can be compared with every symbol of `right`.
    fn ensure_comparable(_left: &[Self], _right: &[Self]) -> Result<()> {
        Ok(())
    }
}

macro_rules! impl_static_symbol {
    ($($ty:ty),* $(,)?) => {
        $(impl Symbol for $ty {})*
    };
}

impl_static_symbol!(
    char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String,
);

impl Symbol for &str {}

/// An ordered, finite run of symbols.
pub trait Sequence {
    type Symbol: Symbol;

    /// View this input as a slice of symbols, borrowing when possible.
    fn to_symbols(&self) -> Result<Cow<'_, [Self::Symbol]>>;
}

impl Sequence for str {
    type Symbol = char;

    fn to_symbols(&self) -> Result<Cow<'_, [char]>> {
        Ok(Cow::Owned(self.chars().collect()))
    }
}

impl Sequence for String {
    type Symbol = char;

    fn to_symbols(&self) -> Result<Cow<'_, [char]>> {
        self.as_str().to_symbols()
    }
}

impl<T: Symbol> Sequence for [T] {
    type Symbol = T;

    fn to_symbols(&self) -> Result<Cow<'_, [T]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Symbol> Sequence for Vec<T> {
    type Symbol = T;

    fn to_symbols(&self) -> Result<Cow<'_, [T]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Symbol, const N: usize> Sequence for [T; N] {
    type Symbol = T;

    fn to_symbols(&self) -> Result<Cow<'_, [T]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Symbol = S::Symbol;

    fn to_symbols(&self) -> Result<Cow<'_, [S::Symbol]>> {
        (**self).to_symbols()
    }
}

/// Convert both sides and check that their symbols compare.
pub(crate) fn prepare<'a, 'b, A, B>(
    a: &'a A,
    b: &'b B,
) -> Result<(Cow<'a, [A::Symbol]>, Cow<'b, [A::Symbol]>)>
where
    A: Sequence + ?Sized,
    B: Sequence<Symbol = A::Symbol> + ?Sized,
{
    let left = a.to_symbols()?;
    let right = b.to_symbols()?;
    A::Symbol::ensure_comparable(&left, &right)?;
    Ok((left, right))
}
