//! High-level API for training and model selection
//!
//! Wires the partitioner and the grid search together behind a builder, so
//! the common case is a few chained calls:
//!
//! ```rust,no_run
//! use revsvm::api::ModelSelector;
//! use revsvm::data;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = data::csv::from_file("reviews.csv")?;
//! let result = ModelSelector::new()
//!     .with_train_fraction(0.8)
//!     .with_seed(42)
//!     .select(&dataset)?;
//!
//! println!(
//!     "best lr={} reg={} accuracy={:.2}%",
//!     result.params.learning_rate,
//!     result.params.regularization,
//!     result.accuracy * 100.0
//! );
//! # Ok(())
//! # }
//! ```

use crate::core::Result;
use crate::data::Dataset;
use crate::partition::partition;
use crate::search::{search, TrainingResult};
use log::info;

/// Default learning-rate grid (log scale)
pub const DEFAULT_LEARNING_RATES: [f64; 5] = [0.0001, 0.001, 0.01, 0.1, 1.0];

/// Default regularization grid (log scale)
pub const DEFAULT_REGULARIZATIONS: [f64; 5] = [0.001, 0.01, 0.1, 1.0, 10.0];

/// Builder for a full model-selection run: seeded split, grid search, final
/// retrain
#[derive(Debug, Clone)]
pub struct ModelSelector {
    train_fraction: f64,
    seed: u64,
    learning_rates: Vec<f64>,
    regularizations: Vec<f64>,
    search_epochs: usize,
    final_epochs: usize,
}

impl ModelSelector {
    /// Create a selector with the default split, grids and epoch budgets
    pub fn new() -> Self {
        Self {
            train_fraction: 0.8,
            seed: 42,
            learning_rates: DEFAULT_LEARNING_RATES.to_vec(),
            regularizations: DEFAULT_REGULARIZATIONS.to_vec(),
            search_epochs: 600,
            final_epochs: 100,
        }
    }

    /// Set the fraction of samples assigned to the train split
    pub fn with_train_fraction(mut self, train_fraction: f64) -> Self {
        self.train_fraction = train_fraction;
        self
    }

    /// Set the shuffle seed for the train/test split
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the learning-rate grid
    pub fn with_learning_rates(mut self, learning_rates: Vec<f64>) -> Self {
        self.learning_rates = learning_rates;
        self
    }

    /// Set the regularization grid
    pub fn with_regularizations(mut self, regularizations: Vec<f64>) -> Self {
        self.regularizations = regularizations;
        self
    }

    /// Set the epoch budget used for every grid trial
    pub fn with_search_epochs(mut self, search_epochs: usize) -> Self {
        self.search_epochs = search_epochs;
        self
    }

    /// Set the epoch budget used for the final retrained model
    pub fn with_final_epochs(mut self, final_epochs: usize) -> Self {
        self.final_epochs = final_epochs;
        self
    }

    /// Partition the dataset, search the grid, retrain the best point
    pub fn select(&self, dataset: &Dataset) -> Result<TrainingResult> {
        let (train, test) = partition(dataset, self.train_fraction, self.seed)?;
        info!(
            "split {} samples into {} train / {} test (seed {})",
            dataset.len(),
            train.len(),
            test.len(),
            self.seed
        );

        let result = search(
            &train,
            &test,
            &self.learning_rates,
            &self.regularizations,
            self.search_epochs,
            self.final_epochs,
        )?;

        info!(
            "best point lr={} reg={} with accuracy {:.4}",
            result.params.learning_rate, result.params.regularization, result.accuracy
        );

        Ok(result)
    }
}

impl Default for ModelSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;
    use crate::data;
    use crate::utils::scaling;
    use std::path::Path;

    /// Tune on a CSV file with default settings, features used as-is
    pub fn tune_csv<P: AsRef<Path>>(path: P) -> Result<TrainingResult> {
        let dataset = data::csv::from_file(path)?;
        ModelSelector::new().select(&dataset)
    }

    /// Tune on a CSV file with default settings, z-scoring features first
    pub fn tune_csv_normalized<P: AsRef<Path>>(path: P) -> Result<TrainingResult> {
        let dataset = data::csv::from_file(path)?;
        let (normalized, _) = scaling::fit_transform(&dataset)?;
        ModelSelector::new().select(&normalized)
    }
}
