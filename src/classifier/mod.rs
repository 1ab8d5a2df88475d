//! Linear classifier trained by stochastic sub-gradient descent
//!
//! Minimizes the soft-margin objective
//! `lambda * ||w||^2 + (1/N) * sum(max(0, 1 - y(w.x + b)))`
//! with per-sample Pegasos-style updates. There is no step-size decay and no
//! projection, so a too-large learning rate can blow the weights up; that
//! condition is detected after every update and surfaced as an error instead
//! of being optimized through.

use crate::core::{HyperParams, Prediction, Result, SvmError};
use crate::data::Dataset;

/// Margin-based linear classifier: weight vector plus bias
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    regularization: f64,
}

impl LinearClassifier {
    /// Create an untrained classifier.
    ///
    /// `learning_rate` must be strictly positive and `regularization`
    /// non-negative.
    pub fn new(learning_rate: f64, regularization: f64) -> Result<Self> {
        if learning_rate.is_nan() || learning_rate <= 0.0 {
            return Err(SvmError::InvalidParameter(format!(
                "learning rate must be strictly positive, got {learning_rate}"
            )));
        }
        if regularization.is_nan() || regularization < 0.0 {
            return Err(SvmError::InvalidParameter(format!(
                "regularization must be non-negative, got {regularization}"
            )));
        }

        Ok(Self {
            weights: Vec::new(),
            bias: 0.0,
            learning_rate,
            regularization,
        })
    }

    /// Create an untrained classifier from a hyperparameter point
    pub fn from_params(params: HyperParams) -> Result<Self> {
        Self::new(params.learning_rate, params.regularization)
    }

    /// Train on a dataset for a fixed number of epochs.
    ///
    /// Weights and bias are fully reset at the start of every call; training
    /// is never incremental. Samples are visited in the dataset's stored
    /// order, without re-shuffling.
    pub fn train(&mut self, data: &Dataset, epochs: usize) -> Result<()> {
        if epochs == 0 {
            return Err(SvmError::InvalidParameter(
                "epochs must be at least 1".to_string(),
            ));
        }

        self.weights = vec![0.0; data.dim()];
        self.bias = 0.0;

        let eta = self.learning_rate;
        let lambda = self.regularization;

        for epoch in 0..epochs {
            for sample in data.iter() {
                let y = sample.label;
                let margin = y * self.decision_function(&sample.features);

                if margin >= 1.0 {
                    // Correctly classified outside the margin band: pure
                    // regularization decay, bias untouched
                    for w in self.weights.iter_mut() {
                        *w -= eta * 2.0 * lambda * *w;
                    }
                } else {
                    // Margin violated: combined regularization + hinge
                    // sub-gradient
                    for (w, &x) in self.weights.iter_mut().zip(sample.features.iter()) {
                        *w -= eta * (2.0 * lambda * *w - y * x);
                    }
                    self.bias += eta * y;
                }

                if !self.is_finite() {
                    return Err(SvmError::NumericInstability { epoch });
                }
            }
        }

        Ok(())
    }

    /// Raw decision value `w.x + b`
    pub fn decision_function(&self, features: &[f64]) -> f64 {
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(&w, &x)| w * x)
            .sum();
        dot + self.bias
    }

    /// Predict the signed label for a feature vector.
    ///
    /// A decision value of exactly zero classifies as +1.
    pub fn predict(&self, features: &[f64]) -> Prediction {
        let decision_value = self.decision_function(features);
        let label = if decision_value >= 0.0 { 1.0 } else { -1.0 };
        Prediction::new(label, decision_value)
    }

    /// Fraction of samples whose prediction matches the stored label
    pub fn accuracy(&self, data: &Dataset) -> Result<f64> {
        if data.is_empty() {
            return Err(SvmError::EmptyDataset);
        }

        let correct = data
            .iter()
            .filter(|s| self.predict(&s.features).label == s.label)
            .count();

        Ok(correct as f64 / data.len() as f64)
    }

    /// Current weight vector (empty before the first `train` call)
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Current bias term
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The hyperparameter point this classifier was built with
    pub fn params(&self) -> HyperParams {
        HyperParams::new(self.learning_rate, self.regularization)
    }

    fn is_finite(&self) -> bool {
        self.bias.is_finite() && self.weights.iter().all(|w| w.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sample;
    use approx::assert_relative_eq;

    fn separable_dataset() -> Dataset {
        Dataset::from_samples(vec![
            Sample::new(vec![2.0, 2.0], 1.0),
            Sample::new(vec![3.0, 3.0], 1.0),
            Sample::new(vec![2.0, 3.0], 1.0),
            Sample::new(vec![-2.0, -2.0], -1.0),
            Sample::new(vec![-3.0, -3.0], -1.0),
            Sample::new(vec![-2.0, -3.0], -1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_bad_params() {
        assert!(LinearClassifier::new(0.0, 0.1).is_err());
        assert!(LinearClassifier::new(-0.01, 0.1).is_err());
        assert!(LinearClassifier::new(f64::NAN, 0.1).is_err());
        assert!(LinearClassifier::new(0.01, -0.1).is_err());
        assert!(LinearClassifier::new(0.01, 0.0).is_ok());
    }

    #[test]
    fn test_train_rejects_zero_epochs() {
        let mut clf = LinearClassifier::new(0.01, 0.0001).unwrap();
        let result = clf.train(&separable_dataset(), 0);
        assert!(matches!(result, Err(SvmError::InvalidParameter(_))));
    }

    #[test]
    fn test_separable_convergence() {
        let data = separable_dataset();
        let mut clf = LinearClassifier::new(0.01, 0.0001).unwrap();
        clf.train(&data, 200).unwrap();

        assert_eq!(clf.accuracy(&data).unwrap(), 1.0);
    }

    #[test]
    fn test_train_resets_state() {
        let data = separable_dataset();
        let mut clf = LinearClassifier::new(0.01, 0.0001).unwrap();

        clf.train(&data, 200).unwrap();
        let first_weights = clf.weights().to_vec();
        let first_bias = clf.bias();

        // Retraining with identical inputs must land on identical state:
        // nothing carries over between calls
        clf.train(&data, 200).unwrap();
        assert_eq!(clf.weights(), first_weights.as_slice());
        assert_eq!(clf.bias(), first_bias);
    }

    #[test]
    fn test_first_step_is_hinge_update() {
        // Weights start at zero, so the very first margin is 0 and the hinge
        // branch fires: w = eta*y*x, b = eta*y
        let data = Dataset::from_samples(vec![Sample::new(vec![2.0, 3.0], 1.0)]).unwrap();
        let mut clf = LinearClassifier::new(0.1, 0.0).unwrap();
        clf.train(&data, 1).unwrap();

        assert_relative_eq!(clf.weights()[0], 0.2);
        assert_relative_eq!(clf.weights()[1], 0.3);
        assert_relative_eq!(clf.bias(), 0.1);
    }

    #[test]
    fn test_regularization_decay_path() {
        // One sample, eta = 0.5: after epoch 1 w = (1, 1), b = 0.5 and the
        // margin is 1*(2 + 2 + 0.5) = 4.5 >= 1, so epoch 2 takes the decay
        // branch: each weight scales by (1 - 2*eta*lambda), bias unchanged.
        let data = Dataset::from_samples(vec![Sample::new(vec![2.0, 2.0], 1.0)]).unwrap();
        let lambda = 0.01;
        let mut clf = LinearClassifier::new(0.5, lambda).unwrap();
        clf.train(&data, 2).unwrap();

        let decay = 1.0 - 2.0 * 0.5 * lambda;
        assert_relative_eq!(clf.weights()[0], 1.0 * decay);
        assert_relative_eq!(clf.weights()[1], 1.0 * decay);
        assert_relative_eq!(clf.bias(), 0.5);
    }

    #[test]
    fn test_predict_zero_decision_is_positive() {
        let clf = LinearClassifier::new(0.01, 0.0).unwrap();
        // Untrained: empty weights, zero bias, decision value 0
        let pred = clf.predict(&[1.0, 2.0]);
        assert_eq!(pred.decision_value, 0.0);
        assert_eq!(pred.label, 1.0);
    }

    #[test]
    fn test_accuracy_bounds() {
        let clf = LinearClassifier::new(0.01, 0.0).unwrap();

        // Untrained classifier predicts +1 everywhere
        let all_positive =
            Dataset::from_samples(vec![
                Sample::new(vec![1.0], 1.0),
                Sample::new(vec![2.0], 1.0),
            ])
            .unwrap();
        assert_eq!(clf.accuracy(&all_positive).unwrap(), 1.0);

        let all_negative =
            Dataset::from_samples(vec![
                Sample::new(vec![1.0], -1.0),
                Sample::new(vec![2.0], -1.0),
            ])
            .unwrap();
        assert_eq!(clf.accuracy(&all_negative).unwrap(), 0.0);

        let mixed = Dataset::from_samples(vec![
            Sample::new(vec![1.0], 1.0),
            Sample::new(vec![2.0], -1.0),
        ])
        .unwrap();
        let accuracy = clf.accuracy(&mixed).unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
        assert_eq!(accuracy, 0.5);
    }

    #[test]
    fn test_accuracy_empty_dataset() {
        // floor(0.4 * 2) = 0, so the train side of this split is empty
        let two = Dataset::from_samples(vec![
            Sample::new(vec![1.0], 1.0),
            Sample::new(vec![2.0], -1.0),
        ])
        .unwrap();
        let (empty_train, _) = crate::partition::partition(&two, 0.4, 0).unwrap();
        assert!(empty_train.is_empty());

        let clf = LinearClassifier::new(0.01, 0.0).unwrap();
        let result = clf.accuracy(&empty_train);
        assert!(matches!(result, Err(SvmError::EmptyDataset)));
    }

    #[test]
    fn test_instability_detection() {
        // With eta = 1e6 and lambda = 1 the decay factor is about -2e6 per
        // step, so the weights overflow to non-finite within a few epochs
        let data = separable_dataset();
        let mut clf = LinearClassifier::new(1e6, 1.0).unwrap();

        let result = clf.train(&data, 100);
        assert!(matches!(result, Err(SvmError::NumericInstability { .. })));
    }

    #[test]
    fn test_decision_function_matches_manual_dot() {
        let data = separable_dataset();
        let mut clf = LinearClassifier::new(0.01, 0.0001).unwrap();
        clf.train(&data, 50).unwrap();

        let x = [1.5, -0.5];
        let expected = clf.weights()[0] * x[0] + clf.weights()[1] * x[1] + clf.bias();
        assert_relative_eq!(clf.decision_function(&x), expected);
    }
}
