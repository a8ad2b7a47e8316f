//! Display-only rounding helpers.

/// Rounds to the nearest integer, halves away from zero.
#[must_use]
pub fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}

/// Rounds to `digits` decimal places.
#[must_use]
pub fn round_to_decimal(value: f64, digits: i32) -> f64 {
    let pow = 10f64.powi(digits);
    (value * pow).round() / pow
}
