/// Rounds to one decimal place (half away from zero).
///
/// Every accumulation point in the scorer goes through this to keep results
/// free of binary floating-point drift.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
