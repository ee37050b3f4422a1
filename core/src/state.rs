use serde::{Deserialize, Serialize};

pub const INITIAL_TEMP_C: f64 = 25.0;
pub const INITIAL_PH: f64 = 8.1;
pub const INITIAL_OXYGEN: f64 = 6.0;

/// Temperature, pH and oxygen of the most recently generated record.
///
/// "Previous" means previous in generation order. Timestamps are drawn
/// independently inside each month, so the predecessor is not necessarily
/// the chronologically closest reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningState {
    pub previous_temp: f64,
    pub previous_ph: f64,
    pub previous_oxygen: f64,
}

impl Default for RunningState {
    fn default() -> Self {
        Self {
            previous_temp: INITIAL_TEMP_C,
            previous_ph: INITIAL_PH,
            previous_oxygen: INITIAL_OXYGEN,
        }
    }
}

impl RunningState {
    /// Sum of absolute deltas against the stored reading.
    ///
    /// Unrounded: the classifier compares this value against its threshold,
    /// and only the written record carries the 2-place rounding.
    pub fn change_factor(&self, temp_c: f64, ph: f64, oxygen: f64) -> f64 {
        (temp_c - self.previous_temp).abs()
            + (ph - self.previous_ph).abs()
            + (oxygen - self.previous_oxygen).abs()
    }

    pub fn record(&mut self, temp_c: f64, ph: f64, oxygen: f64) {
        self.previous_temp = temp_c;
        self.previous_ph = ph;
        self.previous_oxygen = oxygen;
    }
}
