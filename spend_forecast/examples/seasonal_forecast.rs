use chrono::NaiveDate;
use spend_fixtures::{amounts, random_spend};
use spend_forecast::{
    label_series, ForecastConfig, Frequency, HistoricalSpend, Series, SeriesTag, SpendForecaster,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two years of mock monthly freight spend with 5% noise
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).ok_or("invalid start date")?;
    let mock = random_spend(start, 24, 1_000_000.0, 0.0125, 0.05)?;
    let periods = mock.iter().map(|m| m.period).collect();
    let history = HistoricalSpend::new(periods, Series::new(amounts(&mock))?)?;

    // Forecast the next six months
    let forecaster = SpendForecaster::new(ForecastConfig::default())?;
    let outcome = forecaster.forecast(history.series())?;

    println!("Forecast path: {}", outcome.path);
    if let Some(accuracy) = &outcome.accuracy {
        print!("{}", accuracy);
    }

    for point in label_series(&history, &outcome, Frequency::Monthly)? {
        if point.tag != SeriesTag::Forecast {
            continue;
        }
        match (point.lower, point.upper) {
            (Some(lower), Some(upper)) => println!(
                "{}: {:>14.2}  [{:.2} .. {:.2}]",
                point.period, point.value, lower, upper
            ),
            _ => println!("{}: {:>14.2}", point.period, point.value),
        }
    }

    Ok(())
}
