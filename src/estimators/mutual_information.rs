use ndarray::Array2;
use std::hash::Hash;

use crate::estimators::approaches::discrete::discrete_utils::columns_as_vec;
use crate::estimators::approaches::discrete::{DiscreteMultiInformation, DiscreteMutualInformation};
use crate::estimators::config::{BlockOrder, EstimatorConfig};
use crate::estimators::error::{InfoError, Result};
use crate::estimators::traits::GlobalValue;

/// Mutual and multi-information estimation methods for discrete data
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a new discrete mutual information estimator between two series
    pub fn new_discrete<K, B>(
        x: &[K],
        y: &[K],
        k: B,
        config: &EstimatorConfig,
    ) -> Result<DiscreteMutualInformation>
    where
        K: Hash + Eq + Clone,
        B: TryInto<BlockOrder, Error = InfoError>,
    {
        DiscreteMutualInformation::new(x, y, k.try_into()?, config)
    }

    /// Creates a new discrete multi-information estimator over n component series
    pub fn new_multi<K, S, B>(
        components: &[S],
        k: B,
        config: &EstimatorConfig,
    ) -> Result<DiscreteMultiInformation>
    where
        K: Hash + Eq + Clone,
        S: AsRef<[K]>,
        B: TryInto<BlockOrder, Error = InfoError>,
    {
        DiscreteMultiInformation::new(components, k.try_into()?, config)
    }
}

/// Mutual information between two series in bits, padding the shorter one.
///
/// ```rust
/// use statinfo::{entropy, mutual_info};
///
/// let x = [0, 1, 1, 0, 2];
/// assert_eq!(mutual_info(&x, &x, 1).unwrap(), entropy(&x, 1).unwrap());
/// ```
pub fn mutual_info<K, B>(series1: &[K], series2: &[K], k: B) -> Result<f64>
where
    K: Hash + Eq + Clone,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    mutual_info_with(series1, series2, k, &EstimatorConfig::default())
}

/// Mutual information with an explicit pairing policy and log base.
pub fn mutual_info_with<K, B>(
    series1: &[K],
    series2: &[K],
    k: B,
    config: &EstimatorConfig,
) -> Result<f64>
where
    K: Hash + Eq + Clone,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    Ok(MutualInformation::new_discrete(series1, series2, k, config)?.global_value())
}

/// Multi-information (total correlation) of n component series in bits.
///
/// ```rust
/// use statinfo::multi_info;
///
/// let mi = multi_info(&[vec![0, 0, 1, 1], vec![0, 0, 1, 1]], 1).unwrap();
/// assert_eq!(mi, 1.0);
/// ```
pub fn multi_info<K, S, B>(series: &[S], k: B) -> Result<f64>
where
    K: Hash + Eq + Clone,
    S: AsRef<[K]>,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    multi_info_with(series, k, &EstimatorConfig::default())
}

/// Multi-information with an explicit pairing policy and log base.
pub fn multi_info_with<K, S, B>(series: &[S], k: B, config: &EstimatorConfig) -> Result<f64>
where
    K: Hash + Eq + Clone,
    S: AsRef<[K]>,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    Ok(MutualInformation::new_multi(series, k, config)?.global_value())
}

/// Multi-information of the columns of a samples x variables matrix.
pub fn multi_info_columns<T, B>(data: &Array2<T>, k: B) -> Result<f64>
where
    T: Hash + Eq + Clone,
    B: TryInto<BlockOrder, Error = InfoError>,
{
    multi_info(&columns_as_vec(data), k)
}
