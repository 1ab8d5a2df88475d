//! Preprocessing utilities

use crate::core::{Result, Sample, SvmError};
use crate::data::Dataset;

/// Feature scaling utilities
pub mod scaling {
    use super::*;

    /// Mean and standard deviation of one feature column
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ColumnStats {
        pub mean: f64,
        pub std_dev: f64,
    }

    /// Per-column z-score parameters fitted on a dataset.
    ///
    /// Fitting and transforming are separate steps so the statistics can be
    /// computed once on training data (or supplied from elsewhere) and
    /// applied to any dataset of the same dimensionality.
    #[derive(Debug, Clone)]
    pub struct ScalingParams {
        stats: Vec<ColumnStats>,
    }

    impl ScalingParams {
        /// Compute per-column mean and standard deviation.
        ///
        /// Uses population variance (divide by N), matching the statistics
        /// the surrounding review pipeline produces.
        pub fn fit(dataset: &Dataset) -> Self {
            let n = dataset.len() as f64;
            let dim = dataset.dim();

            let mut means = vec![0.0; dim];
            for sample in dataset.iter() {
                for (m, &x) in means.iter_mut().zip(sample.features.iter()) {
                    *m += x;
                }
            }
            for m in means.iter_mut() {
                *m /= n;
            }

            let mut variances = vec![0.0; dim];
            for sample in dataset.iter() {
                for (v, (&x, &m)) in variances
                    .iter_mut()
                    .zip(sample.features.iter().zip(means.iter()))
                {
                    *v += (x - m) * (x - m);
                }
            }

            let stats = means
                .iter()
                .zip(variances.iter())
                .map(|(&mean, &v)| ColumnStats {
                    mean,
                    std_dev: (v / n).sqrt(),
                })
                .collect();

            Self { stats }
        }

        /// Build parameters from externally supplied statistics
        pub fn from_stats(stats: Vec<ColumnStats>) -> Self {
            Self { stats }
        }

        /// Per-column statistics in column order
        pub fn stats(&self) -> &[ColumnStats] {
            &self.stats
        }

        /// Apply `(x - mean) / std_dev` to a single feature vector.
        ///
        /// Constant columns (standard deviation below 1e-12) map to 0.
        pub fn transform_features(&self, features: &[f64]) -> Result<Vec<f64>> {
            if features.len() != self.stats.len() {
                return Err(SvmError::DimensionMismatch {
                    expected: self.stats.len(),
                    actual: features.len(),
                });
            }

            Ok(features
                .iter()
                .zip(self.stats.iter())
                .map(|(&x, s)| {
                    if s.std_dev < 1e-12 {
                        0.0
                    } else {
                        (x - s.mean) / s.std_dev
                    }
                })
                .collect())
        }

        /// Apply `(x - mean) / std_dev` to every column of every sample.
        ///
        /// Constant columns (standard deviation below 1e-12) map to 0.
        /// Fails if the dataset's dimensionality differs from the fitted
        /// statistics.
        pub fn transform(&self, dataset: &Dataset) -> Result<Dataset> {
            if dataset.dim() != self.stats.len() {
                return Err(SvmError::DimensionMismatch {
                    expected: self.stats.len(),
                    actual: dataset.dim(),
                });
            }

            let samples = dataset
                .iter()
                .map(|sample| {
                    let features = self.transform_features(&sample.features)?;
                    Ok(Sample::new(features, sample.label))
                })
                .collect::<Result<Vec<_>>>()?;

            Dataset::from_samples(samples)
        }
    }

    /// Convenience function: fit and transform in one step
    pub fn fit_transform(dataset: &Dataset) -> Result<(Dataset, ScalingParams)> {
        let params = ScalingParams::fit(dataset);
        let transformed = params.transform(dataset)?;
        Ok((transformed, params))
    }
}
