use std::hash::Hash;

use crate::estimators::approaches::discrete::discrete_utils::{
    DiscreteDataset, align_components, encode_compact, zip_components,
};
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
use crate::estimators::approaches::discrete::probability::{
    ExactProbability, FloatProbability, Probabilities, ProbabilityBackend,
};
use crate::estimators::config::{BlockOrder, EstimatorConfig};
use crate::estimators::error::{InfoError, Result};
pub use crate::estimators::approaches::discrete::mle::single_term;
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation methods for discrete data
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new discrete (maximum-likelihood) entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Observations of any hashable type
    ///
    /// # Errors
    ///
    /// [`InfoError::EmptySeries`] if `data` has no observations.
    pub fn new_discrete<K, I>(data: I) -> Result<DiscreteEntropy>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = K>,
    {
        DiscreteEntropy::new(data)
    }

    /// Creates a new block entropy (entropy rate) estimator
    ///
    /// # Arguments
    ///
    /// * `series` - Ordered observations
    /// * `k` - Block length; must convert to a positive integer
    pub fn new_block<K, B>(series: &[K], k: B) -> Result<DiscreteEntropy>
    where
        K: Hash + Eq,
        B: TryInto<BlockOrder, Error = InfoError>,
    {
        DiscreteEntropy::with_block_order(series, k.try_into()?)
    }
}

/// Maximum-likelihood probabilities of every distinct observation.
///
/// With `as_fraction` set, probabilities are exact fractions in lowest terms,
/// otherwise `f64`. Entries follow the first occurrence of each observation.
///
/// ```rust
/// use num::rational::Ratio;
/// use statinfo::probability;
///
/// let p = probability(&[0, 0, 1], true).unwrap();
/// assert_eq!(p.as_exact().unwrap(), &[Ratio::new(2, 3), Ratio::new(1, 3)]);
/// ```
pub fn probability<K: Hash + Eq>(series: &[K], as_fraction: bool) -> Result<Probabilities> {
    if as_fraction {
        probability_with::<K, ExactProbability>(series).map(Probabilities::Exact)
    } else {
        probability_with::<K, FloatProbability>(series).map(Probabilities::Float)
    }
}

/// Probabilities of every distinct observation using backend `B`.
pub fn probability_with<K, B>(series: &[K]) -> Result<Vec<B::Value>>
where
    K: Hash + Eq,
    B: ProbabilityBackend,
{
    Ok(DiscreteDataset::from_data(series)?.probabilities::<B>())
}

/// Occurrence count of every distinct observation, in first-seen order.
pub fn frequencies<K: Hash + Eq>(series: &[K]) -> Result<Vec<(&K, usize)>> {
    let (symbols, codes) = encode_compact(series);
    let dataset = DiscreteDataset::from_codes(codes, symbols.len())?;
    Ok(symbols.into_iter().zip(dataset.counts).collect())
}

/// Shannon entropy of `series` in bits.
///
/// For `k == 1` this is `-Σ p log2 p` over the observed frequencies. For
/// `k > 1` it is the entropy of the overlapping length-k blocks divided by
/// `k` (entropy rate in bits per symbol).
///
/// ```rust
/// use statinfo::entropy;
///
/// assert_eq!(entropy(&[0, 0, 1, 1], 1).unwrap(), 1.0);
/// assert!(entropy(&[0, 0, 1, 1], 1.5).is_err());
/// ```
///
/// # Errors
///
/// [`InfoError::InvalidBlockOrder`] if `k` is not a positive integer and
/// [`InfoError::EmptySeries`] if there is nothing to count.
pub fn entropy<K, B>(series: &[K], k: B) -> Result<f64>
where
    K: Hash + Eq,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    let k = k.try_into()?;
    Ok(DiscreteEntropy::with_block_order(series, k)?.global_value())
}

/// Entropy of the joint series formed by pairing same-index observations of
/// all components (padding shorter components with a missing marker).
pub fn joint_entropy<K, S, B>(components: &[S], k: B) -> Result<f64>
where
    K: Hash + Eq + Clone,
    S: AsRef<[K]>,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    let k = k.try_into()?;
    let aligned = align_components(components, EstimatorConfig::default().pad_policy);
    let joint = zip_components(&aligned)?;
    Ok(DiscreteEntropy::with_block_order(&joint, k)?.global_value())
}
