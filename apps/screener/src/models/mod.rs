pub mod job;
pub mod resume;
pub mod screening;

/// Rounds a score to two decimals for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
