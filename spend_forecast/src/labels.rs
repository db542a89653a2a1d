//! Labelled history-plus-forecast series for display layers

use crate::data::HistoricalSpend;
use crate::engine::ForecastOutcome;
use crate::error::{ForecastError, Result};
use crate::utils::{future_periods, Frequency};
use chrono::NaiveDate;
use serde::Serialize;

/// Origin of a labelled point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesTag {
    Historical,
    Forecast,
}

/// One period of the combined series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPoint {
    pub period: NaiveDate,
    pub value: f64,
    pub tag: SeriesTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

/// History followed by the forecast, one period label per point
pub fn label_series(
    history: &HistoricalSpend,
    outcome: &ForecastOutcome,
    frequency: Frequency,
) -> Result<Vec<LabeledPoint>> {
    let last = history.last_period().ok_or_else(|| {
        ForecastError::InsufficientData("Cannot label an empty history".to_string())
    })?;
    let periods = future_periods(last, outcome.len(), frequency)?;

    let historical = history
        .periods()
        .iter()
        .zip(history.series().values())
        .map(|(&period, &value)| LabeledPoint {
            period,
            value,
            tag: SeriesTag::Historical,
            lower: None,
            upper: None,
        });

    let projected = periods
        .into_iter()
        .zip(outcome.points())
        .map(|(period, point)| LabeledPoint {
            period,
            value: point.value,
            tag: SeriesTag::Forecast,
            lower: point.lower,
            upper: point.upper,
        });

    Ok(historical.chain(projected).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Series;
    use crate::engine::SpendForecaster;

    #[test]
    fn test_history_then_forecast() {
        let periods = vec![
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
        ];
        let series = Series::new(vec![10.0, 12.0]).unwrap();
        let history = HistoricalSpend::new(periods, series).unwrap();
        let outcome = SpendForecaster::default().forecast(history.series()).unwrap();

        let labeled = label_series(&history, &outcome, Frequency::Monthly).unwrap();

        assert_eq!(labeled.len(), 2 + 6);
        assert_eq!(labeled[1].tag, SeriesTag::Historical);
        assert_eq!(labeled[2].tag, SeriesTag::Forecast);
        assert_eq!(labeled[2].period, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(labeled[7].period, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(labeled[2].value, 12.0);
    }
}
