//! Deterministic train/test partitioning
//!
//! Splits a dataset into disjoint train and test subsets by permuting the
//! index range with a seeded Fisher-Yates shuffle. The same seed and dataset
//! always produce the same split, which the reproducibility tests rely on.

use crate::core::{Result, Sample, SvmError};
use crate::data::Dataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Split a dataset into (train, test) subsets.
///
/// `train_fraction` must be in (0, 1) and the dataset must hold at least two
/// samples. The train set receives `floor(train_fraction * len)` samples, in
/// permuted order; the test set receives the remainder, also in permuted
/// order.
pub fn partition(
    dataset: &Dataset,
    train_fraction: f64,
    seed: u64,
) -> Result<(Dataset, Dataset)> {
    if train_fraction.is_nan() || train_fraction <= 0.0 || train_fraction >= 1.0 {
        return Err(SvmError::InvalidSplit(format!(
            "train fraction must be in (0, 1), got {train_fraction}"
        )));
    }
    let n = dataset.len();
    if n < 2 {
        return Err(SvmError::InvalidSplit(format!(
            "dataset must hold at least 2 samples, got {n}"
        )));
    }

    let indices = shuffled_indices(n, seed);
    let train_size = (train_fraction * n as f64).floor() as usize;

    let collect = |range: &[usize]| -> Vec<Sample> {
        range.iter().map(|&i| dataset.get(i).clone()).collect()
    };

    let train = Dataset::from_validated(dataset.dim(), collect(&indices[..train_size]));
    let test = Dataset::from_validated(dataset.dim(), collect(&indices[train_size..]));

    Ok((train, test))
}

/// Fisher-Yates permutation of `[0, n)` driven by a seeded `StdRng`.
///
/// Spelled out rather than delegated to `SliceRandom::shuffle` so the
/// permutation algorithm stays pinned independent of the rand crate's
/// internals.
fn shuffled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        indices.swap(i, j);
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> Dataset {
        let samples = (0..n)
            .map(|i| {
                let label = if i % 2 == 0 { 1.0 } else { -1.0 };
                Sample::new(vec![i as f64, (i * i) as f64], label)
            })
            .collect();
        Dataset::from_samples(samples).unwrap()
    }

    #[test]
    fn test_partition_coverage() {
        let data = dataset(10);
        let (train, test) = partition(&data, 0.8, 42).unwrap();

        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert_eq!(train.len() + test.len(), data.len());

        // Every original sample appears exactly once across the two subsets
        let mut seen: Vec<f64> = train
            .iter()
            .chain(test.iter())
            .map(|s| s.features[0])
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_shuffled_indices_is_permutation() {
        for n in [2, 3, 17, 100] {
            let mut indices = shuffled_indices(n, 7);
            indices.sort_unstable();
            let expected: Vec<usize> = (0..n).collect();
            assert_eq!(indices, expected);
        }
    }

    #[test]
    fn test_partition_reproducibility() {
        let data = dataset(20);

        let (train_a, test_a) = partition(&data, 0.7, 123).unwrap();
        let (train_b, test_b) = partition(&data, 0.7, 123).unwrap();

        let ids = |d: &Dataset| -> Vec<f64> { d.iter().map(|s| s.features[0]).collect() };
        assert_eq!(ids(&train_a), ids(&train_b));
        assert_eq!(ids(&test_a), ids(&test_b));
    }

    #[test]
    fn test_partition_different_seeds_differ() {
        let data = dataset(50);

        let (train_a, _) = partition(&data, 0.8, 1).unwrap();
        let (train_b, _) = partition(&data, 0.8, 2).unwrap();

        let ids = |d: &Dataset| -> Vec<f64> { d.iter().map(|s| s.features[0]).collect() };
        assert_ne!(ids(&train_a), ids(&train_b));
    }

    #[test]
    fn test_partition_small_fraction_allows_empty_train() {
        let data = dataset(2);
        let (train, test) = partition(&data, 0.4, 0).unwrap();
        assert_eq!(train.len(), 0);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_partition_invalid_fraction() {
        let data = dataset(10);
        for fraction in [0.0, 1.0, -0.5, 1.5] {
            let result = partition(&data, fraction, 42);
            assert!(matches!(result, Err(SvmError::InvalidSplit(_))));
        }
    }

    #[test]
    fn test_partition_dataset_too_small() {
        let data = dataset(1);
        let result = partition(&data, 0.8, 42);
        assert!(matches!(result, Err(SvmError::InvalidSplit(_))));
    }
}
