pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// statinfo::estimators::approaches::* ergonomically.
pub use discrete::mle::DiscreteEntropy;
pub use discrete::probability::{ExactProbability, FloatProbability, Probabilities, ProbabilityBackend};
pub use discrete::{DiscreteMultiInformation, DiscreteMutualInformation};
