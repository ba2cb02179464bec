pub mod approaches;
pub mod config;
pub mod entropy;
pub mod error;
pub mod mutual_information;
pub mod observation;
pub mod traits;

pub use config::{BlockOrder, EstimatorConfig, LogBase, PadPolicy};
pub use error::{InfoError, Result};
pub use traits::{GlobalValue, LocalValues, MutualInformationEstimator, OptionalLocalValues};
