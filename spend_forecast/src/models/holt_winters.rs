//! Holt-Winters triple exponential smoothing with multiplicative seasonality
//!
//! ```text
//! Level:    L_t = α (x_t / S_t) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:   S_t = γ (x_t / L_t) + (1 - γ) S_t
//! Forecast: F_{n+m} = (L_n + m T_n) S_{n+m-1}
//! ```
//!
//! Seasonal indices start as the ratio of each first-season observation to
//! the global mean. The level starts at the first observation and the trend
//! at the average per-period change across the first season. Every
//! observation, including those of the first season, is then passed
//! through the update equations.

use crate::config::SmoothingConfig;
use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::models::{FittedState, ForecastModel, TrainedForecastModel};
use spend_math::{checked_ratio, SeasonalCycle};

/// Holt-Winters model
#[derive(Debug, Clone)]
pub struct HoltWinters {
    /// Name of the model
    name: String,
    /// Smoothing coefficients and season length
    config: SmoothingConfig,
}

/// Trained Holt-Winters model
#[derive(Debug, Clone)]
pub struct TrainedHoltWinters {
    /// Name of the model
    name: String,
    /// Length of the training history
    history_len: usize,
    /// Final level, trend and seasonal indices
    state: FittedState,
    /// One-step-ahead predictions made during training
    fitted: Vec<f64>,
}

impl HoltWinters {
    /// Create a new Holt-Winters model
    pub fn new(config: SmoothingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            name: format!(
                "Holt-Winters (alpha={}, beta={}, gamma={}, season={})",
                config.alpha, config.beta, config.gamma, config.season_length
            ),
            config,
        })
    }

    /// Smoothing configuration of this model
    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }
}

impl ForecastModel for HoltWinters {
    type Trained = TrainedHoltWinters;

    fn train(&self, series: &Series) -> Result<Self::Trained> {
        let (state, fitted) = smooth(series, &self.config)?;

        Ok(TrainedHoltWinters {
            name: self.name.clone(),
            history_len: series.len(),
            state,
            fitted,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedHoltWinters {
    /// Fitted level, trend and seasonal indices
    pub fn state(&self) -> &FittedState {
        &self.state
    }

    /// Number of observations the model was trained on
    pub fn history_len(&self) -> usize {
        self.history_len
    }
}

impl TrainedForecastModel for TrainedHoltWinters {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "Forecast horizon must be greater than zero".to_string(),
            ));
        }

        Ok(project(&self.state, self.history_len, horizon))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        Some(&self.fitted)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fit level, trend and seasonal state to a series
///
/// Requires at least `2 * season_length` observations.
pub fn fit(series: &Series, config: &SmoothingConfig) -> Result<FittedState> {
    smooth(series, config).map(|(state, _)| state)
}

/// Project fitted state `forecast_length` periods past a history of `history_len`
///
/// The trend is extrapolated linearly and the trained seasonal indices are
/// re-applied unchanged.
pub fn project(state: &FittedState, history_len: usize, forecast_length: usize) -> Vec<f64> {
    (1..=forecast_length)
        .map(|m| {
            let factor = state.seasonal_cycle().at(history_len + m - 1);
            (state.level() + m as f64 * state.trend()) * factor
        })
        .collect()
}

fn smooth(series: &Series, config: &SmoothingConfig) -> Result<(FittedState, Vec<f64>)> {
    config.validate()?;

    let values = series.values();
    let season = config.season_length;
    if values.len() < config.min_seasonal_history() {
        return Err(ForecastError::InsufficientData(format!(
            "Seasonal fit needs at least {} observations, have {}",
            config.min_seasonal_history(),
            values.len()
        )));
    }

    // Ratio-to-mean initialisation from the first season
    let global_mean = series.mean()?;
    let initial = values[..season]
        .iter()
        .map(|&x| checked_ratio(x, global_mean, "global mean"))
        .collect::<spend_math::Result<Vec<f64>>>()?;
    let mut seasonal = SeasonalCycle::from_values(initial)?;

    let mut level = values[0];
    let mut trend = (values[season] - values[0]) / season as f64;

    let (alpha, beta, gamma) = (config.alpha, config.beta, config.gamma);
    let mut fitted = Vec::with_capacity(values.len());

    for (t, &x) in values.iter().enumerate() {
        let factor = seasonal.at(t);
        fitted.push((level + trend) * factor);

        let new_level =
            alpha * checked_ratio(x, factor, "seasonal factor")? + (1.0 - alpha) * (level + trend);
        let new_trend = beta * (new_level - level) + (1.0 - beta) * trend;
        let new_seasonal =
            gamma * checked_ratio(x, new_level, "level")? + (1.0 - gamma) * factor;

        if !(new_level.is_finite() && new_trend.is_finite() && new_seasonal.is_finite()) {
            return Err(ForecastError::NumericInstability(format!(
                "Smoothing state became non-finite at period {}",
                t
            )));
        }

        seasonal.replace(t, new_seasonal);
        level = new_level;
        trend = new_trend;
    }

    tracing::debug!(
        level,
        trend,
        periods = values.len(),
        season,
        "fitted holt-winters state"
    );

    Ok((FittedState::new(level, trend, seasonal), fitted))
}
