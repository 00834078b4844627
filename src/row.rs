//! One generated record: `ID,Value,Description`.

use rand::Rng;

use crate::VALUE_CENTS;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    /// Always in `[0, 100)` with at most two fractional digits.
    pub value: f64,
    pub description: String,
}

impl Row {
    pub fn new(id: u32, value: f64) -> Self {
        Self {
            id,
            value,
            description: format!("Item {id}"),
        }
    }

    /// Build a row whose value is drawn uniformly from the two-decimal grid
    /// `0.00, 0.01, ..., 99.99`.
    pub fn random<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Self {
        Self::new(id, hundredths_to_value(rng.random_range(0..VALUE_CENTS)))
    }
}

/// Division of two exact doubles rounds to the nearest double, so the result
/// prints back as the same two-decimal literal.
pub fn hundredths_to_value(hundredths: u32) -> f64 {
    hundredths as f64 / 100.0
}
