//! # Spend Forecast
//!
//! Monthly spend forecasting for freight audit dashboards.
//!
//! ## Features
//!
//! - Holt-Winters triple exponential smoothing with multiplicative seasonality
//! - Linear projection of the fitted trend with the trained seasonal cycle
//! - Heuristic confidence bands that widen with the forecast horizon
//! - Growth fallback when the history is shorter than two seasons
//! - CSV loading, period labelling and accuracy metrics around the engine
//!
//! ## Forecast Paths
//!
//! Every call takes exactly one of two paths, chosen from the history length:
//!
//! - **`SEASONAL_FIT`** when `len(series) >= 2 * season_length`: fit, project and bound
//! - **`FALLBACK`** otherwise: grow the last observation, no confidence bounds
//!
//! ## Quick Start
//!
//! ```rust
//! use spend_forecast::{ForecastConfig, ForecastPath, Series, SmoothingConfig, SpendForecaster};
//!
//! let history: Vec<f64> = (0..24).map(|t| 1_000.0 + 10.0 * t as f64).collect();
//! let series = Series::new(history)?;
//!
//! let smoothing = SmoothingConfig::new(0.4, 0.1, 0.3, 12, 6)?;
//! let forecaster = SpendForecaster::new(ForecastConfig::new(smoothing))?;
//!
//! let outcome = forecaster.forecast(&series)?;
//! assert_eq!(outcome.path, ForecastPath::SeasonalFit);
//! assert_eq!(outcome.forecast.len(), 6);
//! assert_eq!(outcome.confidence.len(), 6);
//! # Ok::<(), spend_forecast::ForecastError>(())
//! ```

pub mod confidence;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use crate::confidence::ConfidenceBand;
pub use crate::config::{ForecastConfig, HeuristicParams, SmoothingConfig};
pub use crate::data::{DataLoader, HistoricalSpend, Series};
pub use crate::engine::{forecast, ForecastOutcome, ForecastPath, ForecastPoint, SpendForecaster};
pub use crate::error::{ForecastError, Result};
pub use crate::labels::{label_series, LabeledPoint, SeriesTag};
pub use crate::metrics::AccuracyMetrics;
pub use crate::models::{FittedState, ForecastModel, TrainedForecastModel};
pub use crate::utils::Frequency;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
