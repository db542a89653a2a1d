//! # Freight Spend
//!
//! `freight_spend` bundles the spend forecasting crates behind one import.
//!
//! ## Example
//!
//! ```
//! use freight_spend::{forecast, ForecastConfig, ForecastPath, Series};
//!
//! // Three months is far short of two seasons, so the growth fallback runs
//! let series = Series::new(vec![1_200.0, 1_250.0, 1_300.0]).unwrap();
//! let outcome = forecast(&series, &ForecastConfig::default()).unwrap();
//!
//! assert_eq!(outcome.path, ForecastPath::Fallback);
//! assert_eq!(outcome.forecast.len(), 6);
//! assert!(outcome.confidence.is_empty());
//! ```

pub use spend_forecast::*;
pub use spend_math::{MathError, SeasonalCycle};
