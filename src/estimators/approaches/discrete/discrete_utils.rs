use ndarray::{Array1, Array2, Axis};
use std::collections::HashMap;
use std::hash::Hash;

use crate::estimators::approaches::discrete::probability::ProbabilityBackend;
use crate::estimators::config::{BlockOrder, PadPolicy};
use crate::estimators::error::{InfoError, Result};

/// Frequency table of a discrete series, stored as compact codes.
///
/// Every distinct observation is replaced by a code in `0..n_symbols`, assigned
/// in first-occurrence order, so the table no longer depends on the key type.
pub struct DiscreteDataset {
    /// Code of each sample
    pub codes: Array1<usize>,
    /// Counts per code
    pub counts: Vec<usize>,
    /// Total number of observations
    pub n: usize,
}

impl DiscreteDataset {
    /// Build a DiscreteDataset from any sequence of hashable observations.
    pub fn from_data<K, I>(data: I) -> Result<Self>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = K>,
    {
        let (symbols, codes) = encode_compact(data);
        Self::from_codes(codes, symbols.len())
    }

    /// Build a DiscreteDataset from compact codes in `0..n_symbols`.
    pub fn from_codes(codes: Array1<usize>, n_symbols: usize) -> Result<Self> {
        let n = codes.len();
        if n == 0 {
            return Err(InfoError::EmptySeries);
        }
        if let Some(&code) = codes.iter().find(|&&c| c >= n_symbols) {
            return Err(InfoError::InvalidCode { code, n_symbols });
        }
        let counts = count_codes(&codes, n_symbols);
        Ok(Self { codes, counts, n })
    }

    /// Number of distinct observations.
    #[inline]
    pub fn n_symbols(&self) -> usize {
        self.counts.len()
    }

    /// Relative frequency of every distinct observation, in first-seen order.
    pub fn probabilities<B: ProbabilityBackend>(&self) -> Vec<B::Value> {
        self.counts
            .iter()
            .map(|&cnt| B::from_count(cnt, self.n))
            .collect()
    }

    /// Map each sample to its probability.
    pub fn map_probs(&self) -> Array1<f64> {
        let n_f = self.n as f64;
        self.codes.mapv(|c| self.counts[c] as f64 / n_f)
    }
}

/// Replace each observation by a compact code, in first-occurrence order.
///
/// Returns the distinct observations (indexed by code) and the code array.
pub fn encode_compact<K, I>(data: I) -> (Vec<K>, Array1<usize>)
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let iter = data.into_iter();
    let mut index: HashMap<K, usize> = HashMap::with_capacity(iter.size_hint().0);
    let mut out: Vec<usize> = Vec::with_capacity(iter.size_hint().0);
    for value in iter {
        let next = index.len();
        out.push(*index.entry(value).or_insert(next));
    }
    let mut by_code: Vec<Option<K>> = (0..index.len()).map(|_| None).collect();
    for (value, code) in index {
        by_code[code] = Some(value);
    }
    (by_code.into_iter().flatten().collect(), Array1::from(out))
}

/// Count the occurrences of each code in `0..n_symbols`.
///
/// Codes must already be checked against `n_symbols`.
pub(crate) fn count_codes(codes: &Array1<usize>, n_symbols: usize) -> Vec<usize> {
    let mut dense = vec![0usize; n_symbols];
    for &c in codes.iter() {
        dense[c] += 1;
    }
    dense
}

/// Overlapping windows of length `k` starting at every position `0..=len - k`.
///
/// A series shorter than `k` has no windows and is reported as empty.
pub fn block_windows<K>(series: &[K], k: BlockOrder) -> Result<Vec<&[K]>> {
    let k = k.get();
    if series.len() < k {
        return Err(InfoError::EmptySeries);
    }
    Ok(series.windows(k).collect())
}

/// Bring component series to a common length according to `policy`.
///
/// `None` marks a position absent from a shorter series.
pub fn align_components<K, S>(components: &[S], policy: PadPolicy) -> Vec<Vec<Option<K>>>
where
    K: Clone,
    S: AsRef<[K]>,
{
    let lengths = components.iter().map(|c| c.as_ref().len());
    let len = match policy {
        PadPolicy::Truncate => lengths.min().unwrap_or(0),
        PadPolicy::PadWithSentinel => lengths.max().unwrap_or(0),
    };
    components
        .iter()
        .map(|c| {
            let c = c.as_ref();
            (0..len).map(|i| c.get(i).cloned()).collect()
        })
        .collect()
}

/// Zip aligned components into one joint series of n-tuples.
pub fn zip_components<K: Clone>(aligned: &[Vec<Option<K>>]) -> Result<Vec<Vec<Option<K>>>> {
    let Some(first) = aligned.first() else {
        return Ok(Vec::new());
    };
    let len = first.len();
    if let Some(other) = aligned.iter().find(|c| c.len() != len) {
        return Err(InfoError::LengthMismatch {
            expected: len,
            found: other.len(),
        });
    }
    Ok((0..len)
        .map(|i| aligned.iter().map(|c| c[i].clone()).collect())
        .collect())
}

/// Split a 2D array (samples x variables) into a Vec of owned columns.
pub fn columns_as_vec<T: Clone>(data: &Array2<T>) -> Vec<Vec<T>> {
    data.axis_iter(Axis(1)).map(|col| col.to_vec()).collect()
}
