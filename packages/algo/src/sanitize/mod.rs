//! Data Sanitization
//!
//! Numeric hygiene for quiz values: rounding, validity checks, and
//! range clamping.

use crate::types::{MASTERY_MAX, MASTERY_MIN};

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Check whether a slice contains NaN or infinite values.
pub fn has_invalid_values(values: &[f64]) -> bool {
    values.iter().any(|v| v.is_nan() || v.is_infinite())
}

/// Clamp a mastery value into the mastery scale. Non-finite input
/// collapses to the scale minimum.
pub fn clamp_mastery(value: f64) -> f64 {
    if !value.is_finite() {
        return MASTERY_MIN;
    }
    value.clamp(MASTERY_MIN, MASTERY_MAX)
}

/// Replace a non-finite difficulty with a neutral 1.0. Any finite
/// value passes through untouched, including out-of-range ones.
pub fn sanitize_difficulty(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        1.0
    }
}
