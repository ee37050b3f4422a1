use crate::classifier::{ClassifierInput, SiteStatus};
use crate::environment::Measurements;
use crate::math::RoundHelper;
use crate::sampling::GeoPoint;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Output column order. Consumers index rows by position.
pub const COLUMNS: [&str; 13] = [
    "timestamp",
    "latitude",
    "longitude",
    "depth_m",
    "temp_c",
    "pH",
    "salinity",
    "dissolved_oxygen",
    "co2_ppm",
    "light_intensity",
    "turbidity",
    "change_factor",
    "site_status",
];

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const CHANGE_FACTOR_PLACES: u32 = 2;

/// One labeled dive-site sample.
///
/// Immutable once assembled: fields are private and only readable through
/// accessors. Every value is already at its output precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    timestamp: NaiveDateTime,
    latitude: f64,
    longitude: f64,
    depth_m: f64,
    temp_c: f64,
    #[serde(rename = "pH")]
    ph: f64,
    salinity: f64,
    dissolved_oxygen: f64,
    co2_ppm: f64,
    light_intensity: f64,
    turbidity: f64,
    change_factor: f64,
    site_status: SiteStatus,
}

impl ReadingRecord {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn depth_m(&self) -> f64 {
        self.depth_m
    }

    pub fn temp_c(&self) -> f64 {
        self.temp_c
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn salinity(&self) -> f64 {
        self.salinity
    }

    pub fn dissolved_oxygen(&self) -> f64 {
        self.dissolved_oxygen
    }

    pub fn co2_ppm(&self) -> f64 {
        self.co2_ppm
    }

    pub fn light_intensity(&self) -> f64 {
        self.light_intensity
    }

    pub fn turbidity(&self) -> f64 {
        self.turbidity
    }

    /// Change factor as written, rounded to 2 places.
    pub fn change_factor(&self) -> f64 {
        self.change_factor
    }

    pub fn site_status(&self) -> SiteStatus {
        self.site_status
    }

    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Classifier input built from the written fields.
    ///
    /// The change factor here is the rounded one; the generator labels with
    /// the unrounded value, so a change just above the volatility threshold
    /// can read back as exactly on it.
    pub fn classifier_input(&self) -> ClassifierInput {
        ClassifierInput {
            temp_c: self.temp_c,
            ph: self.ph,
            dissolved_oxygen: self.dissolved_oxygen,
            turbidity: self.turbidity,
            light_intensity: self.light_intensity,
            change_factor: self.change_factor,
        }
    }

    /// Formats the record as CSV fields, in `COLUMNS` order, at fixed precision.
    pub fn to_row(&self) -> [String; 13] {
        [
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            format!("{:.6}", self.latitude),
            format!("{:.6}", self.longitude),
            format!("{:.2}", self.depth_m),
            format!("{:.2}", self.temp_c),
            format!("{:.2}", self.ph),
            format!("{:.2}", self.salinity),
            format!("{:.2}", self.dissolved_oxygen),
            format!("{:.1}", self.co2_ppm),
            format!("{:.1}", self.light_intensity),
            format!("{:.2}", self.turbidity),
            format!("{:.2}", self.change_factor),
            self.site_status.as_str().to_string(),
        ]
    }
}

/// Packs one sample's parts into a record.
///
/// Position and depth come from the samplers and measurements from
/// [`Measurements::rounded`], all already at output precision. The change
/// factor arrives unrounded, as the classifier saw it, and is rounded here.
pub struct RecordAssembler;

impl RecordAssembler {
    pub fn assemble(
        timestamp: NaiveDateTime,
        position: GeoPoint,
        depth_m: f64,
        measurements: &Measurements,
        change_factor: f64,
        site_status: SiteStatus,
    ) -> ReadingRecord {
        ReadingRecord {
            timestamp,
            latitude: position.latitude,
            longitude: position.longitude,
            depth_m,
            temp_c: measurements.temp_c,
            ph: measurements.ph,
            salinity: measurements.salinity,
            dissolved_oxygen: measurements.dissolved_oxygen,
            co2_ppm: measurements.co2_ppm,
            light_intensity: measurements.light_intensity,
            turbidity: measurements.turbidity,
            change_factor: RoundHelper::to_places(change_factor, CHANGE_FACTOR_PLACES),
            site_status,
        }
    }
}
