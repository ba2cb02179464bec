// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # statinfo
//!
//! Maximum-likelihood information measures for discrete data series:
//! entropy, entropy rate, mutual information and multi-information
//! (total correlation). Probabilities are plain relative frequencies; no
//! parametric distribution and no bias correction is assumed.
//!
//! ## Quick Start
//!
//! ```rust
//! use statinfo::{entropy, multi_info, mutual_info, probability};
//!
//! // Two equally likely outcomes carry one bit
//! assert_eq!(entropy(&[0, 0, 1, 1], 1).unwrap(), 1.0);
//!
//! // Entropy rate over blocks of two symbols
//! let rate = entropy(&['a', 'b', 'a', 'b', 'a'], 2).unwrap();
//! assert!(rate <= 1.0);
//!
//! // Perfectly correlated series share all their information
//! let x = [0, 0, 1, 1];
//! assert_eq!(mutual_info(&x, &x, 1).unwrap(), 1.0);
//! assert_eq!(multi_info(&[x, x], 1).unwrap(), 1.0);
//!
//! // Exact probabilities
//! let p = probability(&[0, 0, 1], true).unwrap();
//! assert_eq!(p.len(), 2);
//! ```
//!
//! ## Measures
//!
//! | Measure | Function | Estimator |
//! |---------|----------|-----------|
//! | Probabilities | [`probability`] | [`DiscreteDataset`](estimators::approaches::discrete::discrete_utils::DiscreteDataset) |
//! | Entropy / entropy rate | [`entropy`] | [`DiscreteEntropy`] |
//! | Mutual Information | [`mutual_info`] | [`DiscreteMutualInformation`] |
//! | Multi-Information | [`multi_info`] | [`DiscreteMultiInformation`] |
//!
//! All results are in bits unless a [`LogBase`] is configured on an estimator.
//!
//! ## Observations
//!
//! Any `Hash + Eq` value is an observation: integers, characters, strings,
//! tuples or vectors of them. Heterogeneous nested records are described by
//! [`Observation`] and turned into hashable [`Canonical`] values by
//! [`normalize`] / [`normalize_series`].
//!
//! ## Unequal lengths
//!
//! Joint series are formed by pairing same-index observations. When lengths
//! differ, [`PadPolicy::PadWithSentinel`] (default) fills absent positions with
//! a missing marker and [`PadPolicy::Truncate`] stops at the shortest series.
//!
//! ## Logging
//!
//! Estimators emit `debug`/`trace` records through the [`log`] facade; no
//! logger is installed by the library.

pub mod estimators;

pub use estimators::approaches::{
    DiscreteEntropy, DiscreteMultiInformation, DiscreteMutualInformation, ExactProbability,
    FloatProbability, Probabilities, ProbabilityBackend,
};
pub use estimators::entropy::{
    Entropy, entropy, frequencies, joint_entropy, probability, probability_with, single_term,
};
pub use estimators::mutual_information::{
    MutualInformation, multi_info, multi_info_columns, multi_info_with, mutual_info,
    mutual_info_with,
};
pub use estimators::observation::{Canonical, Observation, normalize, normalize_series};
pub use estimators::{
    BlockOrder, EstimatorConfig, GlobalValue, InfoError, LocalValues, LogBase,
    MutualInformationEstimator, OptionalLocalValues, PadPolicy, Result,
};
