use spend_forecast::{
    label_series, DataLoader, ForecastConfig, Frequency, Result, SpendForecaster,
};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: forecast_spend <history.csv> [config.json]";

fn run(history_path: &str, config_path: Option<&str>) -> Result<String> {
    let config = match config_path {
        Some(path) => ForecastConfig::from_file(path)?,
        None => ForecastConfig::default(),
    };

    let history = DataLoader::from_csv(history_path)?;
    let forecaster = SpendForecaster::new(config)?;
    let outcome = forecaster.forecast(history.series())?;

    tracing::info!(
        path = %outcome.path,
        history = history.series().len(),
        horizon = outcome.len(),
        "forecast complete"
    );
    if let Some(accuracy) = &outcome.accuracy {
        tracing::info!(mape = accuracy.mape, rmse = accuracy.rmse, "in-sample accuracy");
    }

    let labeled = label_series(&history, &outcome, Frequency::Monthly)?;
    Ok(serde_json::to_string_pretty(&labeled)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(history_path) = args.first() else {
        eprintln!("{}", USAGE);
        process::exit(1);
    };

    match run(history_path, args.get(1).map(String::as_str)) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            tracing::error!(error = %err, "forecast failed");
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
