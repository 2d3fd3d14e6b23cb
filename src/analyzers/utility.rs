/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `100 * part / total`, rounded to `decimal_places`.
///
/// Callers guarantee `total > 0`.
pub fn percentage(part: usize, total: usize, decimal_places: i32) -> f64 {
    debug_assert!(total > 0, "percentage of an empty total");
    round_to(part as f64 / total as f64 * 100.0, decimal_places)
}

/// Rounds half to even at `decimal_places`, so `6.25` becomes `6.2`.
pub fn round_to(value: f64, decimal_places: i32) -> f64 {
    let scale = 10f64.powi(decimal_places);
    (value * scale).round_ties_even() / scale
}
