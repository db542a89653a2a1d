//! Utility functions for the spend_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Spacing between consecutive periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One calendar month
    #[default]
    Monthly,
    /// Seven days
    Weekly,
    /// One day
    Daily,
}

impl FromStr for Frequency {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "monthly" | "m" | "1m" => Ok(Frequency::Monthly),
            "weekly" | "w" | "1w" => Ok(Frequency::Weekly),
            "daily" | "d" | "1d" => Ok(Frequency::Daily),
            _ => Err(ForecastError::InvalidData(format!(
                "Unsupported frequency: {}",
                s
            ))),
        }
    }
}

/// Period labels for the `count` periods following `last`
///
/// Monthly steps clamp to the last day of shorter months, so a history
/// ending on January 31st continues with February 28th/29th.
pub fn future_periods(
    last: NaiveDate,
    count: usize,
    frequency: Frequency,
) -> Result<Vec<NaiveDate>> {
    (1..=count)
        .map(|step| {
            step_after(last, step, frequency).ok_or_else(|| {
                ForecastError::InvalidData(format!(
                    "Period {} steps after {} is out of range",
                    step, last
                ))
            })
        })
        .collect()
}

fn step_after(last: NaiveDate, step: usize, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Monthly => {
            let months = u32::try_from(step).ok()?;
            last.checked_add_months(Months::new(months))
        }
        Frequency::Weekly => {
            let days = u64::try_from(step).ok()?.checked_mul(7)?;
            last.checked_add_days(Days::new(days))
        }
        Frequency::Daily => last.checked_add_days(Days::new(u64::try_from(step).ok()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_periods_cross_year() {
        let periods = future_periods(date(2023, 11, 1), 3, Frequency::Monthly).unwrap();
        assert_eq!(periods, vec![date(2023, 12, 1), date(2024, 1, 1), date(2024, 2, 1)]);
    }

    #[test]
    fn test_monthly_periods_clamp_month_end() {
        let periods = future_periods(date(2024, 1, 31), 2, Frequency::Monthly).unwrap();
        assert_eq!(periods, vec![date(2024, 2, 29), date(2024, 3, 31)]);
    }

    #[test]
    fn test_weekly_and_daily() {
        let weekly = future_periods(date(2023, 1, 1), 2, Frequency::Weekly).unwrap();
        assert_eq!(weekly, vec![date(2023, 1, 8), date(2023, 1, 15)]);

        let daily = future_periods(date(2023, 12, 31), 1, Frequency::Daily).unwrap();
        assert_eq!(daily, vec![date(2024, 1, 1)]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_step_beyond_u32_is_out_of_range() {
        let step = u32::MAX as usize + 1;
        assert_eq!(step_after(date(2023, 1, 1), step, Frequency::Monthly), None);
        assert_eq!(step_after(date(2023, 1, 1), step, Frequency::Weekly), None);
        assert_eq!(
            step_after(date(2023, 1, 1), 1, Frequency::Monthly),
            Some(date(2023, 2, 1))
        );
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("1w".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert!("hourly".parse::<Frequency>().is_err());
    }
}
