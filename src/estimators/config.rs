// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::error::{InfoError, Result};

/// Order of the blocks used for entropy-rate estimation.
///
/// A block order is always a positive integer. Conversions from the primitive
/// numeric types validate their input, so `entropy(&data, 1.5)` fails with
/// [`InfoError::InvalidBlockOrder`] instead of silently truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockOrder(usize);

impl BlockOrder {
    /// Plain Shannon entropy, no blocking.
    pub const ONE: BlockOrder = BlockOrder(1);

    pub fn new(k: usize) -> Result<Self> {
        if k < 1 {
            return Err(InfoError::InvalidBlockOrder("k must be positive".into()));
        }
        Ok(Self(k))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self.0 > 1
    }
}

impl Default for BlockOrder {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<usize> for BlockOrder {
    type Error = InfoError;

    fn try_from(k: usize) -> Result<Self> {
        Self::new(k)
    }
}

impl TryFrom<u32> for BlockOrder {
    type Error = InfoError;

    fn try_from(k: u32) -> Result<Self> {
        Self::new(k as usize)
    }
}

impl TryFrom<i64> for BlockOrder {
    type Error = InfoError;

    fn try_from(k: i64) -> Result<Self> {
        if k < 1 {
            return Err(InfoError::InvalidBlockOrder("k must be positive".into()));
        }
        usize::try_from(k)
            .map_err(|_| InfoError::InvalidBlockOrder(format!("k [{k}] does not fit in usize")))
            .and_then(Self::new)
    }
}

impl TryFrom<i32> for BlockOrder {
    type Error = InfoError;

    fn try_from(k: i32) -> Result<Self> {
        Self::try_from(i64::from(k))
    }
}

impl TryFrom<f64> for BlockOrder {
    type Error = InfoError;

    fn try_from(k: f64) -> Result<Self> {
        if !k.is_finite() || k.fract() != 0.0 {
            return Err(InfoError::InvalidBlockOrder("k must be an integer".into()));
        }
        if k < 1.0 {
            return Err(InfoError::InvalidBlockOrder("k must be positive".into()));
        }
        if k > usize::MAX as f64 {
            return Err(InfoError::InvalidBlockOrder(format!("k [{k}] does not fit in usize")));
        }
        Self::new(k as usize)
    }
}

/// How series of different lengths are paired into a joint series.
///
/// The two policies give different numbers on unequal-length input, so the
/// choice is always explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadPolicy {
    /// Pair position by position up to the shortest series.
    Truncate,
    /// Pair up to the longest series, filling absent positions with a
    /// "missing" marker that never equals a real observation.
    #[default]
    PadWithSentinel,
}

/// Logarithm base of reported entropies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LogBase {
    /// Base 2.
    #[default]
    Bits,
    /// Base e.
    Nats,
    /// Base 10.
    Bans,
}

impl LogBase {
    /// Factor converting a value in bits into this base.
    #[inline]
    pub fn from_bits_factor(self) -> f64 {
        match self {
            LogBase::Bits => 1.0,
            LogBase::Nats => std::f64::consts::LN_2,
            LogBase::Bans => std::f64::consts::LOG10_2,
        }
    }
}

/// Options shared by the entropy, mutual- and multi-information estimators.
///
/// ```rust
/// use statinfo::{EstimatorConfig, LogBase, PadPolicy};
///
/// let config = EstimatorConfig::default()
///     .with_pad_policy(PadPolicy::Truncate)
///     .with_log_base(LogBase::Nats);
/// assert_eq!(config.pad_policy, PadPolicy::Truncate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimatorConfig {
    pub pad_policy: PadPolicy,
    pub log_base: LogBase,
}

impl EstimatorConfig {
    pub fn with_pad_policy(mut self, pad_policy: PadPolicy) -> Self {
        self.pad_policy = pad_policy;
        self
    }

    pub fn with_log_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    /// Convert a value computed in bits into the configured base.
    #[inline]
    pub fn scale(&self, bits: f64) -> f64 {
        bits * self.log_base.from_bits_factor()
    }
}
