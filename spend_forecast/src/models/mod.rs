//! Forecasting models for spend series

use crate::data::Series;
use crate::error::Result;
use serde::Serialize;
use spend_math::SeasonalCycle;
use std::fmt::Debug;

/// Level, trend and seasonal indices left behind by a Holt-Winters training run
///
/// Created once per training run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedState {
    level: f64,
    trend: f64,
    seasonal: SeasonalCycle,
}

impl FittedState {
    pub(crate) fn new(level: f64, trend: f64, seasonal: SeasonalCycle) -> Self {
        Self {
            level,
            trend,
            seasonal,
        }
    }

    /// Smoothed level at the end of the history
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Smoothed per-period trend at the end of the history
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Seasonal indices in season order
    pub fn seasonal_indices(&self) -> &[f64] {
        self.seasonal.as_slice()
    }

    /// Seasonal indices as a cycle addressable by absolute period
    pub fn seasonal_cycle(&self) -> &SeasonalCycle {
        &self.seasonal
    }

    /// Number of periods in the season
    pub fn season_length(&self) -> usize {
        self.seasonal.len()
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Project `horizon` periods past the end of the training history
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>>;

    /// One-step-ahead in-sample predictions, if the model produces them
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a spend series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a series
    fn train(&self, series: &Series) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod fallback;
pub mod holt_winters;

pub use fallback::{GrowthFallback, TrainedGrowthFallback};
pub use holt_winters::{fit, project, HoltWinters, TrainedHoltWinters};
