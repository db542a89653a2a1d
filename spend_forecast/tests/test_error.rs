use rstest::rstest;
use spend_forecast::{
    ForecastConfig, ForecastError, HeuristicParams, Series, SmoothingConfig, SpendForecaster,
};
use spend_math::MathError;
use std::io;

#[rstest]
#[case(0.0, 0.1, 0.3, 12, 6)]
#[case(1.0, 0.1, 0.3, 12, 6)]
#[case(0.4, 0.0, 0.3, 12, 6)]
#[case(0.4, 0.1, 1.0, 12, 6)]
#[case(-0.2, 0.1, 0.3, 12, 6)]
#[case(0.4, 0.1, 0.3, 0, 6)]
#[case(0.4, 0.1, 0.3, 12, 0)]
fn test_invalid_configuration(
    #[case] alpha: f64,
    #[case] beta: f64,
    #[case] gamma: f64,
    #[case] season_length: usize,
    #[case] forecast_length: usize,
) {
    let result = SmoothingConfig::new(alpha, beta, gamma, season_length, forecast_length);
    assert!(matches!(result, Err(ForecastError::InvalidConfiguration(_))));
}

#[test]
fn test_forecaster_revalidates_hand_built_config() {
    // fields are public, so a config can bypass `SmoothingConfig::new`
    let smoothing = SmoothingConfig {
        alpha: 1.0,
        ..SmoothingConfig::default()
    };
    let result = SpendForecaster::new(ForecastConfig::new(smoothing));
    assert!(matches!(result, Err(ForecastError::InvalidConfiguration(_))));

    let heuristics = HeuristicParams::default().with_base_volatility(f64::NAN);
    let result =
        SpendForecaster::new(ForecastConfig::default().with_heuristics(heuristics));
    assert!(matches!(result, Err(ForecastError::InvalidConfiguration(_))));
}

#[test]
fn test_insufficient_data() {
    assert!(matches!(
        Series::new(Vec::new()),
        Err(ForecastError::InsufficientData(_))
    ));
}

#[test]
fn test_numeric_instability_on_zero_spend() {
    let series = Series::new(vec![0.0; 24]).unwrap();
    let result = SpendForecaster::default().forecast(&series);
    assert!(matches!(result, Err(ForecastError::NumericInstability(_))));
}

#[test]
fn test_numeric_instability_on_non_finite_observation() {
    let result = Series::new(vec![1.0, f64::INFINITY, 3.0]);
    assert!(matches!(result, Err(ForecastError::NumericInstability(_))));
}

#[test]
fn test_math_error_conversion() {
    let err: ForecastError = MathError::CalculationError("level is zero".to_string()).into();
    assert!(matches!(err, ForecastError::NumericInstability(_)));

    let err: ForecastError = MathError::InsufficientData("empty".to_string()).into();
    assert!(matches!(err, ForecastError::InsufficientData(_)));

    let err: ForecastError = MathError::InvalidInput("empty cycle".to_string()).into();
    assert!(matches!(err, ForecastError::InvalidConfiguration(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidConfiguration("alpha must be between 0 and 1".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid configuration: alpha must be between 0 and 1"
    );

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error = ForecastError::from(io_error);
    let error_string = error.to_string();

    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}
