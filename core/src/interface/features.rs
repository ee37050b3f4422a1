use crate::classifier::SiteStatus;
use crate::dataset::ReadingRecord;
use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 10;

/// Field order expected by the classification service. Differs from the CSV column order.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "dissolved_oxygen",
    "turbidity",
    "depth_m",
    "light_intensity",
    "temp_c",
    "change_factor",
    "month",
    "pH",
    "salinity",
    "co2_ppm",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub dissolved_oxygen: f64,
    pub turbidity: f64,
    pub depth_m: f64,
    pub light_intensity: f64,
    pub temp_c: f64,
    pub change_factor: f64,
    pub month: u32,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub salinity: f64,
    pub co2_ppm: f64,
}

impl FeatureVector {
    /// Builds the vector for a generated record, taking the month from its timestamp.
    pub fn from_record(record: &ReadingRecord) -> Self {
        Self {
            dissolved_oxygen: record.dissolved_oxygen(),
            turbidity: record.turbidity(),
            depth_m: record.depth_m(),
            light_intensity: record.light_intensity(),
            temp_c: record.temp_c(),
            change_factor: record.change_factor(),
            month: record.month(),
            ph: record.ph(),
            salinity: record.salinity(),
            co2_ppm: record.co2_ppm(),
        }
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.dissolved_oxygen,
            self.turbidity,
            self.depth_m,
            self.light_intensity,
            self.temp_c,
            self.change_factor,
            f64::from(self.month),
            self.ph,
            self.salinity,
            self.co2_ppm,
        ]
    }

    /// Single-precision row, the dtype the served model takes.
    pub fn to_f32_array(&self) -> [f32; FEATURE_COUNT] {
        self.to_array().map(|value| value as f32)
    }

    /// Decodes the model's output scores by arg-max.
    pub fn decode_scores(scores: &[f32]) -> Option<SiteStatus> {
        let (index, _) = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| !score.is_nan())
            .fold(None, |best: Option<(usize, f32)>, (i, &score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((i, score)),
            })?;
        SiteStatus::from_class_index(index)
    }
}
