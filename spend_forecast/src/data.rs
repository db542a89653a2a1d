//! Historical spend series and CSV loading

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Ordered, gap-free sequence of per-period spend observations
///
/// A series always holds at least one finite observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Create a series from observations in chronological order
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Series must contain at least one observation".to_string(),
            ));
        }

        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ForecastError::NumericInstability(format!(
                "Observation {} is not finite ({})",
                index, value
            )));
        }

        Ok(Self { values })
    }

    /// Observations in chronological order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent observation
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Mean of all observations
    pub fn mean(&self) -> Result<f64> {
        Ok(spend_math::mean(&self.values)?)
    }

    /// Sub-series covering `start..end`
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start >= end || end > self.values.len() {
            return Err(ForecastError::InvalidData(format!(
                "Invalid slice {}..{} for series of length {}",
                start,
                end,
                self.values.len()
            )));
        }

        Self::new(self.values[start..end].to_vec())
    }
}

/// A series together with the calendar period of each observation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSpend {
    periods: Vec<NaiveDate>,
    series: Series,
}

impl HistoricalSpend {
    /// Pair period labels with observations
    pub fn new(periods: Vec<NaiveDate>, series: Series) -> Result<Self> {
        if periods.len() != series.len() {
            return Err(ForecastError::InvalidData(format!(
                "Periods length ({}) doesn't match series length ({})",
                periods.len(),
                series.len()
            )));
        }

        if let Some(pair) = periods.windows(2).find(|w| w[1] <= w[0]) {
            return Err(ForecastError::InvalidData(format!(
                "Periods must be strictly increasing, found {} after {}",
                pair[1], pair[0]
            )));
        }

        Ok(Self { periods, series })
    }

    /// Period label of each observation
    pub fn periods(&self) -> &[NaiveDate] {
        &self.periods
    }

    /// Spend values
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Period of the most recent observation, `None` when there is no history
    pub fn last_period(&self) -> Option<NaiveDate> {
        self.periods.last().copied()
    }
}

#[derive(Debug, Deserialize)]
struct SpendRecord {
    period: NaiveDate,
    spend: f64,
}

/// Loader for historical spend files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load `period,spend` rows from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<HistoricalSpend> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load `period,spend` rows from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<HistoricalSpend> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut periods = Vec::new();
        let mut values = Vec::new();
        for record in csv_reader.deserialize() {
            let record: SpendRecord = record?;
            periods.push(record.period);
            values.push(record.spend);
        }

        tracing::debug!(rows = values.len(), "loaded spend history");

        let series = Series::new(values)?;
        HistoricalSpend::new(periods, series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_rejects_empty() {
        assert!(matches!(
            Series::new(Vec::new()),
            Err(ForecastError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_series_rejects_non_finite() {
        assert!(matches!(
            Series::new(vec![1.0, f64::NAN]),
            Err(ForecastError::NumericInstability(_))
        ));
    }

    #[test]
    fn test_series_operations() {
        let series = Series::new(vec![100.0, 103.0, 106.0]).unwrap();

        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.last(), 106.0);
        assert!((series.mean().unwrap() - 103.0).abs() < 1e-12);

        let subset = series.slice(1, 3).unwrap();
        assert_eq!(subset.values(), &[103.0, 106.0]);
        assert!(series.slice(2, 2).is_err());
        assert!(series.slice(0, 4).is_err());
    }

    #[test]
    fn test_reader_parses_rows() {
        let csv = "period,spend\n2023-01-01, 1200.5\n2023-02-01,1300\n";
        let history = DataLoader::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(history.series().values(), &[1200.5, 1300.0]);
        assert_eq!(history.last_period(), NaiveDate::from_ymd_opt(2023, 2, 1));
    }

    #[test]
    fn test_reader_rejects_unordered_periods() {
        let csv = "period,spend\n2023-02-01,1\n2023-01-01,2\n";
        assert!(matches!(
            DataLoader::from_reader(csv.as_bytes()),
            Err(ForecastError::InvalidData(_))
        ));
    }

    #[test]
    fn test_reader_rejects_bad_rows() {
        let csv = "period,spend\nnot-a-date,1\n";
        assert!(matches!(
            DataLoader::from_reader(csv.as_bytes()),
            Err(ForecastError::CsvError(_))
        ));

        let csv = "period,spend\n";
        assert!(matches!(
            DataLoader::from_reader(csv.as_bytes()),
            Err(ForecastError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_history_requires_a_period_per_value() {
        let series = Series::new(vec![5.0]).unwrap();
        assert!(matches!(
            HistoricalSpend::new(Vec::new(), series.clone()),
            Err(ForecastError::InvalidData(_))
        ));

        let period = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let history = HistoricalSpend::new(vec![period], series).unwrap();
        assert_eq!(history.periods(), &[period]);
        assert_eq!(history.series().len(), 1);
        assert_eq!(history.last_period(), Some(period));
    }
}
