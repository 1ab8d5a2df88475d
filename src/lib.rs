//! Rust implementation of a linear Support Vector Machine for review
//! authenticity classification
//!
//! Trains a hinge-loss + L2 linear classifier by stochastic sub-gradient
//! descent and selects hyperparameters by exhaustive grid search over a
//! reproducible seeded train/test split.

pub mod api;
pub mod classifier;
pub mod core;
pub mod data;
pub mod partition;
pub mod search;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::{quick, ModelSelector};
pub use crate::classifier::LinearClassifier;
pub use crate::core::error::{Result, SvmError};
pub use crate::core::types::{HyperParams, Prediction, Sample};
pub use crate::data::Dataset;
pub use crate::partition::partition;
pub use crate::search::{search, TrainingResult};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
