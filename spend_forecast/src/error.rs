//! Error types for the spend_forecast crate

use spend_math::MathError;
use thiserror::Error;

/// Custom error types for the spend_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Smoothing or heuristic parameters outside their valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Not enough observations for the requested computation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A denominator or intermediate state was zero or not finite
    #[error("Numeric instability: {0}")]
    NumericInstability(String),

    /// Input data that is malformed rather than too short
    #[error("Data error: {0}")]
    InvalidData(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON (de)serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            MathError::InvalidInput(msg) => ForecastError::InvalidConfiguration(msg),
            MathError::CalculationError(msg) => ForecastError::NumericInstability(msg),
        }
    }
}
