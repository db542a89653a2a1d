//! Heuristic confidence bands
//!
//! The band half-width is `base_volatility * m` times the prediction for
//! horizon `m`, so it widens linearly with distance from the history. This
//! is not a residual-based prediction interval and carries no coverage
//! guarantee.

use serde::{Deserialize, Serialize};

/// Lower and upper bounds per forecast horizon
///
/// Both vectors are empty when no band was produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    /// Lower bound per horizon
    pub lower: Vec<f64>,
    /// Upper bound per horizon
    pub upper: Vec<f64>,
}

impl ConfidenceBand {
    /// A band with no bounds, used for degraded forecasts
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bounds for every prediction, horizon `i + 1` for element `i`
    pub fn heuristic(predictions: &[f64], base_volatility: f64) -> Self {
        let (lower, upper) = predictions
            .iter()
            .enumerate()
            .map(|(i, &p)| bound(p, i + 1, base_volatility))
            .unzip();

        Self { lower, upper }
    }

    /// Number of horizons covered
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// True when the band carries no bounds
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Bounds for the 1-based horizon, if present
    pub fn get(&self, horizon: usize) -> Option<(f64, f64)> {
        let index = horizon.checked_sub(1)?;
        Some((*self.lower.get(index)?, *self.upper.get(index)?))
    }
}

/// Bounds for a single prediction at 1-based horizon `horizon`
///
/// For a positive prediction and `base_volatility * horizon < 1` the result
/// satisfies `lower <= prediction <= upper`.
pub fn bound(prediction: f64, horizon: usize, base_volatility: f64) -> (f64, f64) {
    let volatility = base_volatility * horizon as f64;
    (prediction * (1.0 - volatility), prediction * (1.0 + volatility))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bound_widens_with_horizon() {
        let (l1, u1) = bound(1000.0, 1, 0.05);
        let (l3, u3) = bound(1000.0, 3, 0.05);

        assert_relative_eq!(l1, 950.0);
        assert_relative_eq!(u1, 1050.0);
        assert_relative_eq!(l3, 850.0);
        assert_relative_eq!(u3, 1150.0);
    }

    #[test]
    fn test_heuristic_band() {
        let band = ConfidenceBand::heuristic(&[100.0, 200.0], 0.1);

        assert_eq!(band.len(), 2);
        let (lower, upper) = band.get(1).unwrap();
        assert_relative_eq!(lower, 90.0);
        assert_relative_eq!(upper, 110.0);
        let (lower, upper) = band.get(2).unwrap();
        assert_relative_eq!(lower, 160.0);
        assert_relative_eq!(upper, 240.0);
        assert_eq!(band.get(0), None);
        assert_eq!(band.get(3), None);
    }

    #[test]
    fn test_empty_band() {
        let band = ConfidenceBand::empty();
        assert!(band.is_empty());
        assert!(band.upper.is_empty());
    }

    #[test]
    fn test_zero_volatility_collapses_band() {
        let band = ConfidenceBand::heuristic(&[42.0, 43.0], 0.0);
        assert_eq!(band.lower, vec![42.0, 43.0]);
        assert_eq!(band.upper, vec![42.0, 43.0]);
    }
}
