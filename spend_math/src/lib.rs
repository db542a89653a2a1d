//! # Spend Math
//!
//! Numeric primitives shared by the spend forecasting crates.
//! This crate provides the fixed-size seasonal cycle used by the
//! Holt-Winters engine and a handful of guarded statistics helpers.

use thiserror::Error;

pub mod seasonal_cycle;
pub mod stats;

pub use seasonal_cycle::SeasonalCycle;
pub use stats::{checked_ratio, mean, EPSILON};

/// Errors that can occur in spend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for spend math operations
pub type Result<T> = std::result::Result<T, MathError>;
