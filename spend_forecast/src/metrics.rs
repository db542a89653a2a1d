//! Metrics for evaluating forecast accuracy

use crate::data::Series;
use crate::engine::SpendForecaster;
use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Forecast accuracy metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error over non-zero actuals
    pub mape: f64,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
}

impl std::fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        writeln!(f, "  SMAPE: {:.4}%", self.smape)?;
        Ok(())
    }
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<AccuracyMetrics> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::InvalidData(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;
    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    let (pct_sum, pct_count) = actual
        .iter()
        .zip(errors.iter())
        .filter(|(a, _)| **a != 0.0)
        .fold((0.0, 0usize), |(sum, count), (&a, &e)| {
            (sum + e.abs() / a.abs() * 100.0, count + 1)
        });
    let mape = if pct_count > 0 {
        pct_sum / pct_count as f64
    } else {
        0.0
    };

    let smape = actual
        .iter()
        .zip(forecast.iter())
        .map(|(&a, &f)| {
            let denom = a.abs() + f.abs();
            if denom == 0.0 {
                0.0
            } else {
                200.0 * (a - f).abs() / denom
            }
        })
        .sum::<f64>()
        / n;

    Ok(AccuracyMetrics {
        mae,
        mse,
        rmse,
        mape,
        smape,
    })
}

/// Hold out the last `holdout` observations, forecast them, and score the forecast
///
/// The forecaster's own `forecast_length` is ignored; exactly `holdout`
/// periods are projected.
pub fn evaluate_holdout(
    forecaster: &SpendForecaster,
    series: &Series,
    holdout: usize,
) -> Result<AccuracyMetrics> {
    if holdout == 0 || holdout >= series.len() {
        return Err(ForecastError::InsufficientData(format!(
            "Holdout of {} needs a series longer than it, have {}",
            holdout,
            series.len()
        )));
    }

    let split = series.len() - holdout;
    let train = series.slice(0, split)?;
    let outcome = forecaster.forecast_horizon(&train, holdout)?;

    forecast_accuracy(&outcome.forecast, &series.values()[split..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accuracy_metrics() {
        let actual = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        let forecast = vec![12.0, 18.0, 33.0, 37.0, 52.0];

        let metrics = forecast_accuracy(&forecast, &actual).unwrap();
        assert_relative_eq!(metrics.mae, 2.4);
        assert_relative_eq!(metrics.mse, 6.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.rmse, 6.0f64.sqrt(), epsilon = 1e-12);
        assert!(metrics.mape > 0.0 && metrics.mape < 15.0);
        assert!(metrics.smape > 0.0 && metrics.smape < 15.0);
    }

    #[test]
    fn test_mape_skips_zero_actuals() {
        let metrics = forecast_accuracy(&[1.0, 110.0], &[0.0, 100.0]).unwrap();
        assert_relative_eq!(metrics.mape, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(forecast_accuracy(&[1.0], &[1.0, 2.0]).is_err());
        assert!(forecast_accuracy(&[], &[]).is_err());
    }

    #[test]
    fn test_display() {
        let metrics = forecast_accuracy(&[1.0], &[2.0]).unwrap();
        let text = metrics.to_string();
        assert!(text.contains("MAE:   1.0000"));
        assert!(text.contains("MAPE:  50.0000%"));
    }
}
