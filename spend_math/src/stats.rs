//! Guarded descriptive statistics
//!
//! Thin wrappers over `statrs` that turn empty input and degenerate
//! denominators into `MathError` values instead of `NaN`.

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Denominators with a smaller magnitude than this are treated as zero
pub const EPSILON: f64 = 1e-10;

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot compute the mean of an empty series".to_string(),
        ));
    }

    let mean = values.iter().mean();
    if !mean.is_finite() {
        return Err(MathError::CalculationError(format!(
            "Mean is not finite: {}",
            mean
        )));
    }

    Ok(mean)
}

/// Divide `numerator` by `denominator`, rejecting zero or non-finite denominators
///
/// `what` names the denominator in the error message.
pub fn checked_ratio(numerator: f64, denominator: f64, what: &str) -> Result<f64> {
    if !denominator.is_finite() || denominator.abs() < EPSILON {
        return Err(MathError::CalculationError(format!(
            "{} is zero or not finite ({})",
            what, denominator
        )));
    }

    let ratio = numerator / denominator;
    if !ratio.is_finite() {
        return Err(MathError::CalculationError(format!(
            "{} / {} is not finite",
            numerator, what
        )));
    }

    Ok(ratio)
}
