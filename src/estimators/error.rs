// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised by the discrete information estimators.
///
/// All variants describe bad input; nothing is retried and no partial result
/// is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    /// Block order `k` is not an integer or is smaller than one.
    #[error("invalid block order: {0}")]
    InvalidBlockOrder(String),

    /// Probabilities are undefined for a series without observations.
    #[error("empty series: probability estimation needs at least one observation")]
    EmptySeries,

    /// Composite observations of one series do not share the same arity.
    #[error("shape mismatch at observation {index}: expected arity {expected}, found {found}")]
    ShapeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A compact code lies outside the declared symbol range.
    #[error("code {code} out of range for {n_symbols} symbols")]
    InvalidCode { code: usize, n_symbols: usize },

    /// Series that must be aligned one-to-one have different lengths.
    #[error("series lengths differ: {expected} vs {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, InfoError>;
