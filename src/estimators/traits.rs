// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::error::Result;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local values of the measure.
    fn local_values(&self) -> Array1<f64>;

    /// Derive global_value as the mean of local values.
    fn global_from_local(&self) -> f64 {
        // Estimators never hold empty data, so the mean exists.
        self.local_values().mean().unwrap_or(0.0)
    }
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators return `supports_local() = true` when local values are defined
/// for their input; otherwise `local_values_opt` reports why not.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>>;
}

/// Marker trait for Mutual Information estimator instances.
pub trait MutualInformationEstimator: GlobalValue + OptionalLocalValues {}
