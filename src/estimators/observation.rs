// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical, hashable forms of (possibly nested) observations.
//!
//! Counting needs every observation to be usable as a map key. Atomic values
//! already are; nested records are frozen into fixed-length tuples so that
//! structurally equal observations hash equal.

use crate::estimators::error::{InfoError, Result};

/// One sample of a series: either an atomic value or an ordered record of
/// further observations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Observation<T> {
    Atomic(T),
    Composite(Vec<Observation<T>>),
}

impl<T> Observation<T> {
    pub fn atomic(value: T) -> Self {
        Observation::Atomic(value)
    }

    pub fn composite<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Observation<T>>,
    {
        Observation::Composite(items.into_iter().map(Into::into).collect())
    }

    /// Number of direct children; atomic observations have none.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Observation::Atomic(_) => None,
            Observation::Composite(items) => Some(items.len()),
        }
    }
}

impl<T> From<Vec<T>> for Observation<T> {
    fn from(values: Vec<T>) -> Self {
        Observation::Composite(values.into_iter().map(Observation::Atomic).collect())
    }
}

/// Hashable, immutable form of an [`Observation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Canonical<T> {
    Atom(T),
    Tuple(Box<[Canonical<T>]>),
}

impl<T> Canonical<T> {
    pub fn as_atom(&self) -> Option<&T> {
        match self {
            Canonical::Atom(v) => Some(v),
            Canonical::Tuple(_) => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Canonical<T>]> {
        match self {
            Canonical::Atom(_) => None,
            Canonical::Tuple(items) => Some(items),
        }
    }
}

/// Convert an observation into its canonical form.
///
/// Atomic values pass through unchanged; composite values are converted
/// element-wise, recursively, into immutable tuples. An empty composite
/// becomes the empty tuple.
pub fn normalize<T: Clone>(observation: &Observation<T>) -> Canonical<T> {
    match observation {
        Observation::Atomic(v) => Canonical::Atom(v.clone()),
        Observation::Composite(items) => Canonical::Tuple(items.iter().map(normalize).collect()),
    }
}

/// Normalize a whole series, checking that every observation has the shape
/// of the first one.
///
/// Mixing atomic and composite observations, or composites of different
/// arity, is reported as [`InfoError::ShapeMismatch`]. Atomic observations are
/// reported with arity 0.
pub fn normalize_series<T: Clone>(series: &[Observation<T>]) -> Result<Vec<Canonical<T>>> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let expected = first.arity();
    let mut out = Vec::with_capacity(series.len());
    for (index, obs) in series.iter().enumerate() {
        let found = obs.arity();
        if found != expected {
            return Err(InfoError::ShapeMismatch {
                index,
                expected: expected.unwrap_or(0),
                found: found.unwrap_or(0),
            });
        }
        out.push(normalize(obs));
    }
    log::trace!("normalized {} observations (arity {:?})", out.len(), expected);
    Ok(out)
}
