//! Forecast configuration
//!
//! `SmoothingConfig` carries the Holt-Winters coefficients chosen by the
//! caller. `HeuristicParams` holds the two constants that shape the
//! confidence band and the fallback projection. Neither constant is
//! statistically calibrated; they are exposed so callers can tune them.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default per-period band width used by the confidence estimator
pub const DEFAULT_BASE_VOLATILITY: f64 = 0.05;

/// Default per-period growth used by the fallback estimator
pub const DEFAULT_GROWTH_RATE: f64 = 0.02;

/// Holt-Winters smoothing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Level smoothing coefficient, in (0, 1)
    pub alpha: f64,
    /// Trend smoothing coefficient, in (0, 1)
    pub beta: f64,
    /// Seasonal smoothing coefficient, in (0, 1)
    pub gamma: f64,
    /// Number of periods in one seasonal cycle
    pub season_length: usize,
    /// Number of periods to project
    pub forecast_length: usize,
}

impl SmoothingConfig {
    /// Create a validated smoothing configuration
    pub fn new(
        alpha: f64,
        beta: f64,
        gamma: f64,
        season_length: usize,
        forecast_length: usize,
    ) -> Result<Self> {
        let config = Self {
            alpha,
            beta,
            gamma,
            season_length,
            forecast_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its valid range
    pub fn validate(&self) -> Result<()> {
        check_unit_interval(self.alpha, "alpha")?;
        check_unit_interval(self.beta, "beta")?;
        check_unit_interval(self.gamma, "gamma")?;

        if self.season_length == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "season_length must be greater than zero".to_string(),
            ));
        }
        if self.forecast_length == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "forecast_length must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Minimum history length for a seasonal fit
    pub fn min_seasonal_history(&self) -> usize {
        self.season_length.saturating_mul(2)
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.4,
            beta: 0.1,
            gamma: 0.3,
            season_length: 12,
            forecast_length: 6,
        }
    }
}

/// Tunable constants for the confidence band and fallback projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicParams {
    /// Band half-width per period of horizon, as a fraction of the prediction
    pub base_volatility: f64,
    /// Growth applied per period by the fallback estimator
    pub growth_rate: f64,
}

impl HeuristicParams {
    /// Replace the base volatility
    pub fn with_base_volatility(mut self, base_volatility: f64) -> Self {
        self.base_volatility = base_volatility;
        self
    }

    /// Replace the fallback growth rate
    pub fn with_growth_rate(mut self, growth_rate: f64) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    /// Check both constants are usable
    pub fn validate(&self) -> Result<()> {
        if !self.base_volatility.is_finite() || self.base_volatility < 0.0 {
            return Err(ForecastError::InvalidConfiguration(format!(
                "base_volatility must be a non-negative finite number, got {}",
                self.base_volatility
            )));
        }
        if !self.growth_rate.is_finite() {
            return Err(ForecastError::InvalidConfiguration(format!(
                "growth_rate must be finite, got {}",
                self.growth_rate
            )));
        }
        Ok(())
    }
}

impl Default for HeuristicParams {
    fn default() -> Self {
        Self {
            base_volatility: DEFAULT_BASE_VOLATILITY,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

/// Complete configuration for one forecasting call
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Holt-Winters coefficients and horizon
    pub smoothing: SmoothingConfig,
    /// Band and fallback constants
    #[serde(default)]
    pub heuristics: HeuristicParams,
}

impl ForecastConfig {
    /// Create a configuration with default heuristics
    pub fn new(smoothing: SmoothingConfig) -> Self {
        Self {
            smoothing,
            heuristics: HeuristicParams::default(),
        }
    }

    /// Replace the heuristic constants
    pub fn with_heuristics(mut self, heuristics: HeuristicParams) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<()> {
        self.smoothing.validate()?;
        self.heuristics.validate()
    }
}

fn check_unit_interval(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(ForecastError::InvalidConfiguration(format!(
            "{} must be strictly between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}
