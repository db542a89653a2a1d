//! # Spend Fixtures
//!
//! Mock monthly freight spend for exercising the forecasting engine.
//!
//! Deterministic generators build exact seasonal shapes for assertions;
//! noisy generators add multiplicative Gaussian noise, either from a seed
//! (reproducible) or from the thread RNG (dashboard-style mock data).
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use spend_fixtures::{amounts, seasonal_spend};
//!
//! let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let history = seasonal_spend(start, 24, 1_000_000.0, 0.0125);
//! assert_eq!(amounts(&history).len(), 24);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod utils;

pub use utils::{
    amounts, flat_spend, noisy_spend, random_spend, seasonal_spend, to_csv, FREIGHT_SEASONALITY,
};

/// Errors that can occur while generating fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Invalid fixture parameter: {0}")]
    InvalidParameter(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Spend booked against one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpend {
    /// First day of the month
    pub period: NaiveDate,
    /// Total spend for the month
    #[serde(rename = "spend")]
    pub amount: f64,
}
