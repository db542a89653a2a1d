use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use spend_forecast::utils::future_periods;
use spend_forecast::{Frequency, ForecastConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_future_periods_monthly() {
    let periods = future_periods(date(2023, 12, 1), 6, Frequency::Monthly).unwrap();

    assert_eq!(
        periods,
        vec![
            date(2024, 1, 1),
            date(2024, 2, 1),
            date(2024, 3, 1),
            date(2024, 4, 1),
            date(2024, 5, 1),
            date(2024, 6, 1),
        ]
    );
}

#[test]
fn test_future_periods_empty_horizon() {
    let periods = future_periods(date(2023, 12, 1), 0, Frequency::Daily).unwrap();
    assert!(periods.is_empty());
}

#[test]
fn test_future_periods_out_of_range() {
    let result = future_periods(NaiveDate::MAX, 1, Frequency::Monthly);
    assert!(result.is_err());
}

#[test]
fn test_frequency_serde() {
    let json = serde_json::to_string(&Frequency::Weekly).unwrap();
    assert_eq!(json, "\"weekly\"");

    let parsed: Frequency = serde_json::from_str("\"monthly\"").unwrap();
    assert_eq!(parsed, Frequency::Monthly);
}

#[test]
fn test_config_round_trip_through_json() {
    let config = ForecastConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed = ForecastConfig::from_json_str(&json).unwrap();

    assert_eq!(parsed, config);
}
