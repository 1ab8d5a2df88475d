//! Core type definitions for the linear classifier

/// Prediction result containing label and decision value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class label (+1 or -1)
    pub label: f64,
    /// Raw decision function value
    pub decision_value: f64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: f64, decision_value: f64) -> Self {
        Self {
            label,
            decision_value,
        }
    }

    /// Get confidence as absolute value of decision value
    pub fn confidence(&self) -> f64 {
        self.decision_value.abs()
    }
}

/// Training sample with dense features and label
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Feature vector (dense representation)
    pub features: Vec<f64>,
    /// Class label (+1 or -1 for binary classification)
    pub label: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }

    /// Number of features
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// One point of the hyperparameter grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperParams {
    /// Sub-gradient descent step size (strictly positive)
    pub learning_rate: f64,
    /// L2 regularization strength (non-negative)
    pub regularization: f64,
}

impl HyperParams {
    /// Create a new hyperparameter point
    pub fn new(learning_rate: f64, regularization: f64) -> Self {
        Self {
            learning_rate,
            regularization,
        }
    }
}

impl Default for HyperParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            regularization: 0.001,
        }
    }
}
