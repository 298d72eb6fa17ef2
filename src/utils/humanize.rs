/// Round a value to the given number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Format a float without a trailing fractional zero.
///
/// `30.0` becomes `"30"`, `29.97` stays `"29.97"`.
pub fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Same as [`format_float`] but keeps the shortest `f32` representation,
/// so `29.97f32` does not widen into `29.969999313354492`.
pub fn format_float_f32(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f32 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
