//! CSV format loading
//!
//! Loads review feature files where:
//! - The first column is the raw label (0 = fabricated, 1 = genuine)
//! - All other columns are numeric features
//! - First row can be headers (automatically detected)
//!
//! Raw labels are mapped to the signed form the classifier expects:
//! 0 -> -1, 1 -> +1. A -1 label passes through unchanged.

use crate::core::{Result, Sample, SvmError};
use crate::data::Dataset;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a dataset from a CSV file
///
/// The first column is the label. Headers are automatically detected.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path).map_err(SvmError::IoError)?;
    let reader = BufReader::new(file);
    from_reader(reader)
}

/// Load a dataset from a reader with header auto-detection
pub fn from_reader<R: BufRead>(reader: R) -> Result<Dataset> {
    from_reader_with_options(reader, true)
}

/// Load a dataset from a reader with explicit header option
pub fn from_reader_with_options<R: BufRead>(
    mut reader: R,
    auto_detect_header: bool,
) -> Result<Dataset> {
    let mut samples = Vec::new();
    let mut first_line = String::new();

    reader.read_line(&mut first_line).map_err(SvmError::IoError)?;
    let first_line = first_line.trim();

    if first_line.is_empty() {
        return Err(SvmError::EmptyDataset);
    }

    if !first_line.starts_with('#') {
        let has_header = auto_detect_header && is_header_line(first_line);
        if !has_header {
            samples.push(parse_data_line(first_line)?);
        }
    }

    for line in reader.lines() {
        let line = line.map_err(SvmError::IoError)?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        samples.push(parse_data_line(line)?);
    }

    Dataset::from_samples(samples)
}

/// Check if a line appears to be a header
fn is_header_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() < 2 {
        return false;
    }

    // Majority of fields non-numeric means headers
    let non_numeric_count = fields
        .iter()
        .filter(|field| field.trim().parse::<f64>().is_err())
        .count();

    non_numeric_count > fields.len() / 2
}

/// Parse a CSV data line into a Sample
fn parse_data_line(line: &str) -> Result<Sample> {
    let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

    if fields.len() < 2 {
        return Err(SvmError::ParseError(format!(
            "Line has too few fields: {line}"
        )));
    }

    // First field is the raw label
    let label_str = fields[0];
    let raw_label = label_str
        .parse::<f64>()
        .map_err(|_| SvmError::ParseError(format!("Invalid label: {label_str}")))?;

    let label = match raw_label {
        l if l == 0.0 => -1.0,
        l if l == 1.0 => 1.0,
        l if l == -1.0 => -1.0,
        other => return Err(SvmError::InvalidLabel(other)),
    };

    let mut features = Vec::with_capacity(fields.len() - 1);
    for (idx, field) in fields.iter().skip(1).enumerate() {
        let value = field.parse::<f64>().map_err(|_| {
            SvmError::ParseError(format!(
                "Invalid feature value at column {}: {}",
                idx + 2,
                field
            ))
        })?;
        features.push(value);
    }

    Ok(Sample::new(features, label))
}
