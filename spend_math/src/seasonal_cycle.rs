//! Fixed-size circular buffer of seasonal indices
//!
//! A `SeasonalCycle` holds one multiplicative index per position in a
//! season. It is addressed by absolute period number: period `t` maps to
//! position `t % len`, so the buffer wraps once per season and every write
//! overwrites the value that the next full cycle will read.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Seasonal indices keyed by period position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalCycle {
    indices: Vec<f64>,
}

impl SeasonalCycle {
    /// Create a cycle from the initial indices of one full season
    pub fn from_values(indices: Vec<f64>) -> Result<Self> {
        if indices.is_empty() {
            return Err(MathError::InvalidInput(
                "Seasonal cycle must have at least one position".to_string(),
            ));
        }

        Ok(Self { indices })
    }

    /// Create a cycle of `length` positions all set to `value`
    pub fn uniform(length: usize, value: f64) -> Result<Self> {
        Self::from_values(vec![value; length])
    }

    /// Number of positions in one season
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false; a cycle has at least one position
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position inside the season for an absolute period number
    pub fn position(&self, period: usize) -> usize {
        period % self.indices.len()
    }

    /// Index in effect for the given absolute period
    pub fn at(&self, period: usize) -> f64 {
        self.indices[self.position(period)]
    }

    /// Overwrite the index for the given absolute period, returning the old value
    pub fn replace(&mut self, period: usize, value: f64) -> f64 {
        let position = self.position(period);
        std::mem::replace(&mut self.indices[position], value)
    }

    /// Indices in season order, starting at position 0
    pub fn as_slice(&self) -> &[f64] {
        &self.indices
    }

    /// Iterate indices in season order
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.indices.iter()
    }

    /// Consume the cycle and return its indices
    pub fn into_vec(self) -> Vec<f64> {
        self.indices
    }
}
