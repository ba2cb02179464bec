use ndarray::Array1;
use std::hash::Hash;

use crate::estimators::approaches::discrete::discrete_utils::{DiscreteDataset, block_windows};
use crate::estimators::approaches::discrete::probability::{
    ExactProbability, FloatProbability, ProbabilityBackend,
};
use crate::estimators::config::{BlockOrder, LogBase};
use crate::estimators::error::Result;
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// One term `-p log2 p` of the Shannon sum; zero for `p == 0` and `p == 1`.
#[inline]
pub fn single_term(p: f64) -> f64 {
    if p > 0.0 && p < 1.0 { -p * p.log2() } else { 0.0 }
}

/// Maximum-likelihood Shannon entropy estimator for discrete data (bits by default).
///
/// Computes H = -Σ p_i log2 p_i from empirical probabilities p_i = n_i/N.
/// With a block order k > 1 the estimate is taken over the overlapping
/// length-k windows of the series and divided by k, giving the entropy rate
/// in bits per symbol.
///
/// Local values are the information content `-log2 p(x)` of each observation
/// (each window for k > 1, also divided by k); their mean is the global value.
pub struct DiscreteEntropy {
    dataset: DiscreteDataset,
    block_order: BlockOrder,
    log_base: LogBase,
}

impl DiscreteEntropy {
    pub fn new<K, I>(data: I) -> Result<Self>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = K>,
    {
        let dataset = DiscreteDataset::from_data(data)?;
        Ok(Self {
            dataset,
            block_order: BlockOrder::ONE,
            log_base: LogBase::default(),
        })
    }

    /// Entropy rate over length-k blocks of `series`.
    pub fn with_block_order<K>(series: &[K], block_order: BlockOrder) -> Result<Self>
    where
        K: Hash + Eq,
    {
        if !block_order.is_blocked() {
            return Self::new(series);
        }
        let windows = block_windows(series, block_order)?;
        log::trace!(
            "block entropy over {} windows of length {}",
            windows.len(),
            block_order.get()
        );
        let dataset = DiscreteDataset::from_data(windows)?;
        Ok(Self {
            dataset,
            block_order,
            log_base: LogBase::default(),
        })
    }

    pub fn with_log_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    pub fn block_order(&self) -> BlockOrder {
        self.block_order
    }

    /// Number of observations (windows, for block order k > 1) counted.
    pub fn len(&self) -> usize {
        self.dataset.n
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.n == 0
    }

    pub fn dataset(&self) -> &DiscreteDataset {
        &self.dataset
    }

    /// Entropy computed from exact fractional probabilities.
    ///
    /// Each reduced fraction is only converted to `f64` for the logarithm.
    pub fn exact_value(&self) -> f64 {
        let h: f64 = self
            .dataset
            .probabilities::<ExactProbability>()
            .iter()
            .map(|p| single_term(ExactProbability::to_f64(p)))
            .sum();
        self.finish(h)
    }

    #[inline]
    fn finish(&self, bits: f64) -> f64 {
        // `+ 0.0` turns the empty-sum -0.0 into 0.0
        bits / self.block_order.get() as f64 * self.log_base.from_bits_factor() + 0.0
    }
}

impl GlobalValue for DiscreteEntropy {
    /// Calculate global entropy for the data set.
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        // -sum(p * log2 p). Order of iteration doesn't matter for sum.
        let h: f64 = self
            .dataset
            .probabilities::<FloatProbability>()
            .into_iter()
            .map(single_term)
            .sum();
        self.finish(h)
    }
}

impl LocalValues for DiscreteEntropy {
    fn local_values(&self) -> Array1<f64> {
        let p_local = self.dataset.map_probs();
        let scale = self.finish(1.0);
        p_local.mapv(|p| (0.0 - p.log2()) * scale)
    }
}

impl OptionalLocalValues for DiscreteEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>> {
        Ok(self.local_values())
    }
}
