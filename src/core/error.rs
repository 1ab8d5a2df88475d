//! Error types for the linear classifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Empty hyperparameter grid: {0}")]
    EmptyGrid(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid label: expected -1 or +1, got {0}")]
    InvalidLabel(f64),

    #[error("Numeric instability: non-finite weights after epoch {epoch}")]
    NumericInstability { epoch: usize },

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, SvmError>;
