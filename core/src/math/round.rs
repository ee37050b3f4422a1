/// Fixed decimal-place rounding used for every emitted field.
pub struct RoundHelper;

impl RoundHelper {
    /// Rounds half away from zero to `places` decimal digits.
    pub fn to_places(value: f64, places: u32) -> f64 {
        let scale = 10f64.powi(places as i32);
        (value * scale).round() / scale
    }
}
