//! Forecast orchestration
//!
//! `SpendForecaster` decides once, from the history length alone, whether a
//! call runs the seasonal Holt-Winters path or the growth fallback, then
//! projects the horizon and attaches confidence bounds on the seasonal path.
//! Each call is independent; nothing is cached between calls.

use crate::config::ForecastConfig;
use crate::confidence::ConfidenceBand;
use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::metrics::{forecast_accuracy, AccuracyMetrics};
use crate::models::{
    FittedState, ForecastModel, GrowthFallback, HoltWinters, TrainedForecastModel,
};
use serde::Serialize;

/// Which estimator produced a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForecastPath {
    /// Full Holt-Winters fit with confidence bounds
    SeasonalFit,
    /// Linear growth from the last observation, no bounds
    Fallback,
}

impl ForecastPath {
    /// Path taken for a history of `history_len` with the given season length
    pub fn select(history_len: usize, season_length: usize) -> Self {
        if history_len >= season_length.saturating_mul(2) {
            ForecastPath::SeasonalFit
        } else {
            ForecastPath::Fallback
        }
    }
}

impl std::fmt::Display for ForecastPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastPath::SeasonalFit => write!(f, "SEASONAL_FIT"),
            ForecastPath::Fallback => write!(f, "FALLBACK"),
        }
    }
}

/// A single projected period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// 1-based distance from the end of the history
    pub horizon: usize,
    /// Point forecast
    pub value: f64,
    /// Lower bound, seasonal path only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    /// Upper bound, seasonal path only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

/// Result of one forecasting call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastOutcome {
    /// Estimator that produced the forecast
    pub path: ForecastPath,
    /// Point forecasts, one per horizon
    pub forecast: Vec<f64>,
    /// Bounds per horizon, empty on the fallback path
    pub confidence: ConfidenceBand,
    /// Trained state, seasonal path only
    pub fitted: Option<FittedState>,
    /// In-sample one-step-ahead accuracy, seasonal path only
    pub accuracy: Option<AccuracyMetrics>,
}

impl ForecastOutcome {
    /// True when the forecast came from the fallback estimator
    pub fn is_degraded(&self) -> bool {
        self.path == ForecastPath::Fallback
    }

    /// Number of projected periods
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    /// True when nothing was projected
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Forecast values paired with their bounds
    pub fn points(&self) -> Vec<ForecastPoint> {
        self.forecast
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let bounds = self.confidence.get(i + 1);
                ForecastPoint {
                    horizon: i + 1,
                    value,
                    lower: bounds.map(|(lower, _)| lower),
                    upper: bounds.map(|(_, upper)| upper),
                }
            })
            .collect()
    }

    /// Pretty-printed JSON representation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Spend forecaster
#[derive(Debug, Clone, Default)]
pub struct SpendForecaster {
    config: ForecastConfig,
}

impl SpendForecaster {
    /// Create a forecaster from a validated configuration
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast `forecast_length` periods past the end of `series`
    pub fn forecast(&self, series: &Series) -> Result<ForecastOutcome> {
        self.forecast_horizon(series, self.config.smoothing.forecast_length)
    }

    /// Forecast an explicit number of periods past the end of `series`
    pub fn forecast_horizon(&self, series: &Series, horizon: usize) -> Result<ForecastOutcome> {
        if horizon == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "Forecast horizon must be greater than zero".to_string(),
            ));
        }

        let smoothing = &self.config.smoothing;
        let path = ForecastPath::select(series.len(), smoothing.season_length);
        tracing::debug!(
            %path,
            history = series.len(),
            season = smoothing.season_length,
            horizon,
            "selected forecast path"
        );

        match path {
            ForecastPath::SeasonalFit => self.seasonal(series, horizon),
            ForecastPath::Fallback => self.fallback(series, horizon),
        }
    }

    fn seasonal(&self, series: &Series, horizon: usize) -> Result<ForecastOutcome> {
        let model = HoltWinters::new(self.config.smoothing)?;
        let trained = model.train(series)?;

        let forecast = trained.forecast(horizon)?;
        let confidence =
            ConfidenceBand::heuristic(&forecast, self.config.heuristics.base_volatility);
        let accuracy = match trained.fitted_values() {
            Some(fitted) => Some(forecast_accuracy(fitted, series.values())?),
            None => None,
        };

        Ok(ForecastOutcome {
            path: ForecastPath::SeasonalFit,
            forecast,
            confidence,
            fitted: Some(trained.state().clone()),
            accuracy,
        })
    }

    fn fallback(&self, series: &Series, horizon: usize) -> Result<ForecastOutcome> {
        tracing::warn!(
            history = series.len(),
            required = self.config.smoothing.min_seasonal_history(),
            "history too short for a seasonal fit, using growth fallback"
        );

        let model = GrowthFallback::new(self.config.heuristics.growth_rate)?;
        let forecast = model.train(series)?.forecast(horizon)?;

        Ok(ForecastOutcome {
            path: ForecastPath::Fallback,
            forecast,
            confidence: ConfidenceBand::empty(),
            fitted: None,
            accuracy: None,
        })
    }
}

/// Forecast `series` with `config` in a single call
pub fn forecast(series: &Series, config: &ForecastConfig) -> Result<ForecastOutcome> {
    SpendForecaster::new(*config)?.forecast(series)
}
