//! Growth fallback for histories too short to fit a season
//!
//! Projects the last observation forward with a fixed per-period growth
//! rate: `prediction[i] = last * (1 + i * growth_rate)` for `i = 0..horizon`.
//! No trend or seasonal decomposition is attempted.

use crate::config::DEFAULT_GROWTH_RATE;
use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};

/// Linear growth fallback model
#[derive(Debug, Clone)]
pub struct GrowthFallback {
    /// Name of the model
    name: String,
    /// Growth applied per period
    growth_rate: f64,
}

/// Trained growth fallback model
#[derive(Debug, Clone)]
pub struct TrainedGrowthFallback {
    /// Name of the model
    name: String,
    /// Growth applied per period
    growth_rate: f64,
    /// Last observed value
    last_value: f64,
}

impl GrowthFallback {
    /// Create a new fallback model
    pub fn new(growth_rate: f64) -> Result<Self> {
        if !growth_rate.is_finite() {
            return Err(ForecastError::InvalidConfiguration(format!(
                "growth_rate must be finite, got {}",
                growth_rate
            )));
        }

        Ok(Self {
            name: format!("Growth fallback (rate={})", growth_rate),
            growth_rate,
        })
    }

    /// Growth applied per period
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }
}

impl Default for GrowthFallback {
    fn default() -> Self {
        Self {
            name: format!("Growth fallback (rate={})", DEFAULT_GROWTH_RATE),
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

impl ForecastModel for GrowthFallback {
    type Trained = TrainedGrowthFallback;

    fn train(&self, series: &Series) -> Result<Self::Trained> {
        Ok(TrainedGrowthFallback {
            name: self.name.clone(),
            growth_rate: self.growth_rate,
            last_value: series.last(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedGrowthFallback {
    /// Value the projection starts from
    pub fn last_value(&self) -> f64 {
        self.last_value
    }
}

impl TrainedForecastModel for TrainedGrowthFallback {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "Forecast horizon must be greater than zero".to_string(),
            ));
        }

        Ok(fallback(self.last_value, horizon, self.growth_rate))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        None
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Grow `last` linearly by `growth_rate` per period for `forecast_length` periods
///
/// The first prediction repeats `last` unchanged.
pub fn fallback(last: f64, forecast_length: usize, growth_rate: f64) -> Vec<f64> {
    (0..forecast_length)
        .map(|i| last * (1.0 + i as f64 * growth_rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_growth_projection() {
        let forecast = fallback(1000.0, 4, 0.02);

        assert_eq!(forecast.len(), 4);
        assert_relative_eq!(forecast[0], 1000.0);
        assert_relative_eq!(forecast[1], 1020.0);
        assert_relative_eq!(forecast[3], 1060.0);
    }

    #[test]
    fn test_trained_from_last_observation() {
        let series = Series::new(vec![5.0, 7.0, 200.0]).unwrap();
        let trained = GrowthFallback::default().train(&series).unwrap();

        assert_eq!(trained.last_value(), 200.0);
        assert!(trained.fitted_values().is_none());
        assert_relative_eq!(trained.forecast(2).unwrap()[1], 204.0);
        assert!(trained.forecast(0).is_err());
    }

    #[test]
    fn test_custom_rate() {
        let model = GrowthFallback::new(-0.1).unwrap();
        let trained = model.train(&Series::new(vec![100.0]).unwrap()).unwrap();
        let forecast = trained.forecast(3).unwrap();

        assert_relative_eq!(forecast[2], 80.0);
        assert!(GrowthFallback::new(f64::NAN).is_err());
    }
}
