// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

pub mod discrete_utils;
pub mod mle;
pub mod probability;

use ndarray::Array1;
use std::hash::Hash;

use crate::estimators::approaches::discrete::discrete_utils::{align_components, zip_components};
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
use crate::estimators::config::{BlockOrder, EstimatorConfig, PadPolicy};
use crate::estimators::error::{InfoError, Result};
use crate::estimators::traits::{
    GlobalValue, LocalValues, MutualInformationEstimator, OptionalLocalValues,
};

/// Discrete Multi-Information (total correlation) estimator using the
/// entropy-summation formula.
///
/// I(X1; ...; Xn) = Σ H(Xi) - H(X1, ..., Xn). With a block order k > 1 every
/// term is the order-k entropy rate. Components are aligned with the
/// configured [`PadPolicy`] first.
pub struct DiscreteMultiInformation {
    marginals: Vec<DiscreteEntropy>,
    joint: DiscreteEntropy,
}

impl DiscreteMultiInformation {
    pub fn new<K, S>(components: &[S], block_order: BlockOrder, config: &EstimatorConfig) -> Result<Self>
    where
        K: Hash + Eq + Clone,
        S: AsRef<[K]>,
    {
        if components.is_empty() {
            return Err(InfoError::EmptySeries);
        }
        let aligned = align_components(components, config.pad_policy);
        let marginals = aligned
            .iter()
            .map(|c| {
                DiscreteEntropy::with_block_order(c, block_order)
                    .map(|e| e.with_log_base(config.log_base))
            })
            .collect::<Result<Vec<_>>>()?;
        let joint_series = zip_components(&aligned)?;
        let joint = DiscreteEntropy::with_block_order(&joint_series, block_order)?
            .with_log_base(config.log_base);
        log::debug!(
            "multi-information over {} components of length {}, block order {}",
            aligned.len(),
            joint_series.len(),
            block_order.get()
        );
        Ok(Self { marginals, joint })
    }

    pub fn marginals(&self) -> &[DiscreteEntropy] {
        &self.marginals
    }

    pub fn joint(&self) -> &DiscreteEntropy {
        &self.joint
    }

    fn lengths_match(&self) -> bool {
        self.marginals.iter().all(|m| m.len() == self.joint.len())
    }
}

impl GlobalValue for DiscreteMultiInformation {
    fn global_value(&self) -> f64 {
        let h_marginals: f64 = self.marginals.iter().map(|m| m.global_value()).sum();
        let h_joint = self.joint.global_value();
        // I(X1; ...; Xn) = sum H(Xi) - H(X1, ..., Xn)
        h_marginals - h_joint
    }
}

impl OptionalLocalValues for DiscreteMultiInformation {
    fn supports_local(&self) -> bool {
        self.lengths_match()
    }

    fn local_values_opt(&self) -> Result<Array1<f64>> {
        if let Some(m) = self.marginals.iter().find(|m| m.len() != self.joint.len()) {
            return Err(InfoError::LengthMismatch {
                expected: self.joint.len(),
                found: m.len(),
            });
        }
        let mut res = Array1::zeros(self.joint.len());
        for m in &self.marginals {
            res += &m.local_values();
        }
        res -= &self.joint.local_values();
        Ok(res)
    }
}

impl MutualInformationEstimator for DiscreteMultiInformation {}

/// Discrete Mutual Information estimator between two series.
///
/// For block order 1 with [`PadPolicy::PadWithSentinel`], I(X; Y) = H(X) + H(Y) - H(X, Y),
/// with the marginal entropies taken over the series as given and the joint
/// entropy over the padded position-wise pairs. With [`PadPolicy::Truncate`],
/// and for block order k > 1, the estimate is the (order-k) multi-information
/// of the pair, in which the marginals see the aligned series. Under
/// truncation the result never exceeds either marginal entropy.
///
/// Small negative values can appear from floating-point rounding when the
/// true mutual information is zero.
pub struct DiscreteMutualInformation {
    inner: DiscreteMultiInformation,
}

impl DiscreteMutualInformation {
    pub fn new<K>(x: &[K], y: &[K], block_order: BlockOrder, config: &EstimatorConfig) -> Result<Self>
    where
        K: Hash + Eq + Clone,
    {
        if block_order.is_blocked() || config.pad_policy == PadPolicy::Truncate {
            let inner = DiscreteMultiInformation::new::<K, _>(&[x, y], block_order, config)?;
            return Ok(Self { inner });
        }
        let h_x = DiscreteEntropy::new(x)?.with_log_base(config.log_base);
        let h_y = DiscreteEntropy::new(y)?.with_log_base(config.log_base);
        let aligned = align_components::<K, _>(&[x, y], config.pad_policy);
        let joint_series = zip_components(&aligned)?;
        let joint = DiscreteEntropy::new(joint_series)?.with_log_base(config.log_base);
        log::debug!(
            "mutual information of series with lengths {} and {} ({:?})",
            x.len(),
            y.len(),
            config.pad_policy
        );
        Ok(Self {
            inner: DiscreteMultiInformation {
                marginals: vec![h_x, h_y],
                joint,
            },
        })
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> f64 {
        self.inner.global_value()
    }
}

impl OptionalLocalValues for DiscreteMutualInformation {
    fn supports_local(&self) -> bool {
        self.inner.supports_local()
    }

    /// Pointwise mutual information i(x;y) = h(x) + h(y) - h(x,y).
    fn local_values_opt(&self) -> Result<Array1<f64>> {
        self.inner.local_values_opt()
    }
}

impl MutualInformationEstimator for DiscreteMutualInformation {}
