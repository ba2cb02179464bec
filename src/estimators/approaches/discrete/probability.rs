// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Probability backends for maximum-likelihood (frequency) estimation.
//!
//! Both backends turn a count `v` out of `n` observations into `v / n`;
//! [`FloatProbability`] as an `f64`, [`ExactProbability`] as a fraction
//! reduced to lowest terms. The exact backend is slower but sums to exactly one.

use num::rational::Ratio;
use std::fmt::Debug;

/// Strategy converting frequency counts into probabilities.
pub trait ProbabilityBackend {
    /// Representation of a single probability.
    type Value: Clone + Debug + PartialEq;

    /// Probability of an outcome observed `count` times out of `total`.
    fn from_count(count: usize, total: usize) -> Self::Value;

    /// Lossy conversion for use in logarithms.
    fn to_f64(value: &Self::Value) -> f64;
}

/// Floating-point probabilities (fast, may carry rounding error).
pub struct FloatProbability;

/// Exact rational probabilities in lowest terms.
pub struct ExactProbability;

impl ProbabilityBackend for FloatProbability {
    type Value = f64;

    #[inline]
    fn from_count(count: usize, total: usize) -> f64 {
        count as f64 / total as f64
    }

    #[inline]
    fn to_f64(value: &f64) -> f64 {
        *value
    }
}

impl ProbabilityBackend for ExactProbability {
    type Value = Ratio<u64>;

    #[inline]
    fn from_count(count: usize, total: usize) -> Ratio<u64> {
        // Ratio::new reduces to lowest terms
        Ratio::new(count as u64, total as u64)
    }

    #[inline]
    fn to_f64(value: &Ratio<u64>) -> f64 {
        *value.numer() as f64 / *value.denom() as f64
    }
}

/// Probability distribution in either representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Probabilities {
    Float(Vec<f64>),
    Exact(Vec<Ratio<u64>>),
}

impl Probabilities {
    pub fn len(&self) -> usize {
        match self {
            Probabilities::Float(p) => p.len(),
            Probabilities::Exact(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Probabilities as `f64`, whatever the representation.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Probabilities::Float(p) => p.clone(),
            Probabilities::Exact(p) => p.iter().map(ExactProbability::to_f64).collect(),
        }
    }

    pub fn as_exact(&self) -> Option<&[Ratio<u64>]> {
        match self {
            Probabilities::Float(_) => None,
            Probabilities::Exact(p) => Some(p),
        }
    }
}
