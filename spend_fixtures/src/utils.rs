//! Spend generators and helpers

use crate::{FixtureError, MonthlySpend};
use chrono::{Datelike, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Calendar multipliers indexed by month (January first)
///
/// Peak season lifts November and December by 40%; February runs 20% light.
pub const FREIGHT_SEASONALITY: [f64; 12] = [
    1.0, 0.8, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.4, 1.4,
];

fn generate<F>(start: NaiveDate, months: usize, mut amount: F) -> Vec<MonthlySpend>
where
    F: FnMut(usize, NaiveDate) -> f64,
{
    (0..months)
        .map_while(|i| {
            let period = start.checked_add_months(Months::new(i as u32))?;
            Some(MonthlySpend {
                period,
                amount: amount(i, period),
            })
        })
        .collect()
}

fn seasonal_baseline(base: f64, growth: f64, i: usize, period: NaiveDate) -> f64 {
    let month = period.month0() as usize;
    base * (1.0 + growth).powi(i as i32) * FREIGHT_SEASONALITY[month]
}

/// Compounding baseline shaped by `FREIGHT_SEASONALITY`, no noise
///
/// # Arguments
/// * `start` - Period of the first observation
/// * `months` - Number of observations
/// * `base` - Spend in the first month before seasonality
/// * `growth` - Compounding growth per month (0.0125 = 1.25%)
pub fn seasonal_spend(
    start: NaiveDate,
    months: usize,
    base: f64,
    growth: f64,
) -> Vec<MonthlySpend> {
    generate(start, months, |i, period| {
        seasonal_baseline(base, growth, i, period)
    })
}

/// The same amount every month
pub fn flat_spend(start: NaiveDate, months: usize, amount: f64) -> Vec<MonthlySpend> {
    generate(start, months, |_, _| amount)
}

fn noisy_with<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    months: usize,
    base: f64,
    growth: f64,
    noise: f64,
) -> Result<Vec<MonthlySpend>, FixtureError> {
    let normal = Normal::new(0.0, noise).map_err(|e| {
        FixtureError::InvalidParameter(format!("noise must be a finite non-negative value: {}", e))
    })?;

    Ok(generate(start, months, |i, period| {
        let shock = 1.0 + normal.sample(rng);
        seasonal_baseline(base, growth, i, period) * shock.max(0.05)
    }))
}

/// Seasonal spend with multiplicative Gaussian noise from a seeded RNG
///
/// The same seed always produces the same series.
pub fn noisy_spend(
    start: NaiveDate,
    months: usize,
    base: f64,
    growth: f64,
    noise: f64,
    seed: u64,
) -> Result<Vec<MonthlySpend>, FixtureError> {
    let mut rng = StdRng::seed_from_u64(seed);
    noisy_with(&mut rng, start, months, base, growth, noise)
}

/// Seasonal spend with multiplicative Gaussian noise from the thread RNG
pub fn random_spend(
    start: NaiveDate,
    months: usize,
    base: f64,
    growth: f64,
    noise: f64,
) -> Result<Vec<MonthlySpend>, FixtureError> {
    let mut rng = thread_rng();
    noisy_with(&mut rng, start, months, base, growth, noise)
}

/// Spend amounts in period order
pub fn amounts(history: &[MonthlySpend]) -> Vec<f64> {
    history.iter().map(|m| m.amount).collect()
}

/// Render a history as `period,spend` CSV
pub fn to_csv(history: &[MonthlySpend]) -> Result<String, FixtureError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in history {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FixtureError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| FixtureError::InvalidParameter(e.to_string()))
}
