// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One reference against many candidates.
//!
//! Every candidate is independent, so the batch is embarrassingly parallel.
//! Rayon's `collect` keeps results in candidate order no matter which worker
//! finishes first, without any locking. `map_init` gives each worker its own
//! [`OsaBuffer`], reused for all the candidates that worker picks up.
//!
//! Validation is fail-fast and happens before any DP work: every candidate is
//! converted and checked in input order, and the first bad one aborts the call
//! with its index attached. Converted candidates are not kept; each worker
//! decodes its candidate again right before computing it, so a batch holds
//! at most one decoded candidate per worker.

use std::borrow::Cow;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::contracts::check_batch_shape;
use crate::error::Result;
use crate::normalize::normalize;
use crate::osa::OsaBuffer;
use crate::sequence::{Sequence, Symbol};

/// Batches shorter than this run on the calling thread.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 64;

/// Runtime knobs for batch execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Spread candidates across the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
    /// Minimum number of candidates before going parallel.
    pub min_parallel_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl BatchConfig {
    /// Always run on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Will a batch of `len` candidates run in parallel?
    pub fn runs_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.min_parallel_len
    }
}

/// OSA distance from `reference` to each candidate, in candidate order.
///
/// ```
/// use osa_distance::distance_batch;
///
/// let days = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
/// assert_eq!(distance_batch("Saturday", &days).unwrap(), vec![3, 5, 5, 6, 4, 5, 0]);
/// ```
pub fn distance_batch<R, C>(reference: &R, candidates: &[C]) -> Result<Vec<usize>>
where
    R: Sequence + ?Sized,
    C: Sequence<Symbol = R::Symbol> + Sync,
{
    distance_batch_with(reference, candidates, &BatchConfig::default())
}

/// [`distance_batch`] with explicit execution settings.
pub fn distance_batch_with<R, C>(
    reference: &R,
    candidates: &[C],
    config: &BatchConfig,
) -> Result<Vec<usize>>
where
    R: Sequence + ?Sized,
    C: Sequence<Symbol = R::Symbol> + Sync,
{
    let reference = validate_batch(reference, candidates)?;
    let results = map_candidates(&*reference, candidates, config, |buffer, r, c| {
        buffer.distance(r, c)
    })?;
    check_batch_shape(results.len(), candidates.len());
    Ok(results)
}

/// Normalized OSA distance from `reference` to each candidate, in candidate order.
pub fn normalized_distance_batch<R, C>(reference: &R, candidates: &[C]) -> Result<Vec<f64>>
where
    R: Sequence + ?Sized,
    C: Sequence<Symbol = R::Symbol> + Sync,
{
    normalized_distance_batch_with(reference, candidates, &BatchConfig::default())
}

/// [`normalized_distance_batch`] with explicit execution settings.
pub fn normalized_distance_batch_with<R, C>(
    reference: &R,
    candidates: &[C],
    config: &BatchConfig,
) -> Result<Vec<f64>>
where
    R: Sequence + ?Sized,
    C: Sequence<Symbol = R::Symbol> + Sync,
{
    let reference = validate_batch(reference, candidates)?;
    let results = map_candidates(&*reference, candidates, config, |buffer, r, c| {
        normalize(buffer.distance(r, c), r.len(), c.len())
    })?;
    check_batch_shape(results.len(), candidates.len());
    Ok(results)
}

/// Convert the reference and check every candidate against it, stopping at
/// the first failure. Candidate symbols are dropped as soon as they pass.
fn validate_batch<'r, R, C>(reference: &'r R, candidates: &[C]) -> Result<Cow<'r, [R::Symbol]>>
where
    R: Sequence + ?Sized,
    C: Sequence<Symbol = R::Symbol>,
{
    let reference = reference.to_symbols()?;
    // Catch a reference that is inconsistent on its own, even for an empty batch.
    R::Symbol::ensure_comparable(&reference, &[])?;

    for (index, candidate) in candidates.iter().enumerate() {
        candidate
            .to_symbols()
            .and_then(|symbols| R::Symbol::ensure_comparable(&reference, &symbols))
            .map_err(|e| {
                tracing::debug!(index, error = %e, "rejected batch candidate");
                e.at_candidate(index)
            })?;
    }

    Ok(reference)
}

fn map_candidates<S, C, O, F>(reference: &[S], candidates: &[C], config: &BatchConfig, f: F) -> Result<Vec<O>>
where
    S: Symbol,
    C: Sequence<Symbol = S> + Sync,
    O: Send,
    F: Fn(&mut OsaBuffer, &[S], &[S]) -> O + Send + Sync,
{
    let parallel = config.runs_parallel(candidates.len());
    tracing::debug!(
        candidates = candidates.len(),
        reference_len = reference.len(),
        parallel,
        "computing OSA batch"
    );

    if parallel {
        map_parallel(reference, candidates, f)
    } else {
        map_sequential(reference, candidates, f)
    }
}

// Candidates are decoded again here, one at a time per worker. They already
// passed `validate_batch`, so the `?` never fires.

fn map_sequential<S, C, O, F>(reference: &[S], candidates: &[C], f: F) -> Result<Vec<O>>
where
    S: Symbol,
    C: Sequence<Symbol = S>,
    F: Fn(&mut OsaBuffer, &[S], &[S]) -> O,
{
    let mut buffer = OsaBuffer::with_capacity(reference.len());
    candidates
        .iter()
        .map(|candidate| -> Result<O> {
            let symbols = candidate.to_symbols()?;
            Ok(f(&mut buffer, reference, &symbols))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn map_parallel<S, C, O, F>(reference: &[S], candidates: &[C], f: F) -> Result<Vec<O>>
where
    S: Symbol,
    C: Sequence<Symbol = S> + Sync,
    O: Send,
    F: Fn(&mut OsaBuffer, &[S], &[S]) -> O + Send + Sync,
{
    candidates
        .par_iter()
        .map_init(
            || OsaBuffer::with_capacity(reference.len()),
            |buffer, candidate| -> Result<O> {
                let symbols = candidate.to_symbols()?;
                Ok(f(buffer, reference, &symbols))
            },
        )
        .collect()
}

/// Non-parallel fallback: same results, calling thread only.
#[cfg(not(feature = "parallel"))]
fn map_parallel<S, C, O, F>(reference: &[S], candidates: &[C], f: F) -> Result<Vec<O>>
where
    S: Symbol,
    C: Sequence<Symbol = S>,
    F: Fn(&mut OsaBuffer, &[S], &[S]) -> O,
{
    map_sequential(reference, candidates, f)
}
