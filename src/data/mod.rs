//! Dataset container and data loading
//!
//! The `Dataset` owns its samples exclusively and is validated at
//! construction: every feature vector has the same length and every label
//! is -1 or +1. It is read-only afterwards.

pub mod csv;

use crate::core::{Result, Sample, SvmError};

/// An in-memory collection of (feature vector, label) pairs with fixed
/// dimensionality
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Sample>,
    dim: usize,
}

impl Dataset {
    /// Build a dataset from samples, validating dimensions and labels.
    ///
    /// The dimensionality is taken from the first sample; any sample with a
    /// different length fails with `DimensionMismatch`, any label outside
    /// {-1, +1} with `InvalidLabel`.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self> {
        let first = samples.first().ok_or(SvmError::EmptyDataset)?;
        let dim = first.dim();

        for sample in &samples {
            if sample.dim() != dim {
                return Err(SvmError::DimensionMismatch {
                    expected: dim,
                    actual: sample.dim(),
                });
            }
            if sample.label != 1.0 && sample.label != -1.0 {
                return Err(SvmError::InvalidLabel(sample.label));
            }
        }

        Ok(Self { samples, dim })
    }

    /// Build a dataset from already-validated samples.
    ///
    /// Used by the partitioner, which re-indexes an existing dataset and may
    /// legitimately produce an empty subset.
    pub(crate) fn from_validated(dim: usize, samples: Vec<Sample>) -> Self {
        debug_assert!(samples.iter().all(|s| s.dim() == dim));
        Self { samples, dim }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of features (dimensionality)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get a single sample by index
    ///
    /// # Panics
    /// Panics if `i >= len()`
    pub fn get(&self, i: usize) -> &Sample {
        &self.samples[i]
    }

    /// Iterate over samples in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Get all labels as a vector
    pub fn labels(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(features: Vec<f64>, label: f64) -> Sample {
        Sample::new(features, label)
    }

    #[test]
    fn test_from_samples() {
        let dataset = Dataset::from_samples(vec![
            sample(vec![1.0, 2.0], 1.0),
            sample(vec![3.0, 4.0], -1.0),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dim(), 2);
        assert_eq!(dataset.labels(), vec![1.0, -1.0]);
        assert_eq!(dataset.get(1).features, vec![3.0, 4.0]);
    }

    #[test]
    fn test_from_samples_empty() {
        let result = Dataset::from_samples(vec![]);
        assert!(matches!(result, Err(SvmError::EmptyDataset)));
    }

    #[test]
    fn test_from_samples_dimension_mismatch() {
        let result = Dataset::from_samples(vec![
            sample(vec![1.0, 2.0], 1.0),
            sample(vec![3.0], -1.0),
        ]);

        assert!(matches!(
            result,
            Err(SvmError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_from_samples_invalid_label() {
        let result = Dataset::from_samples(vec![sample(vec![1.0], 0.5)]);
        assert!(matches!(result, Err(SvmError::InvalidLabel(l)) if l == 0.5));
    }

    #[test]
    fn test_iteration_order_is_stored_order() {
        let dataset = Dataset::from_samples(vec![
            sample(vec![1.0], 1.0),
            sample(vec![2.0], -1.0),
            sample(vec![3.0], 1.0),
        ])
        .unwrap();

        let firsts: Vec<f64> = dataset.iter().map(|s| s.features[0]).collect();
        assert_eq!(firsts, vec![1.0, 2.0, 3.0]);
    }
}
