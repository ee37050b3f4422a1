use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::classifier::{ClassifierInput, RuleClassifier, SiteClassifier, SiteStatus};
pub use crate::dataset::ReadingRecord;

/// Base position of the simulated dive site (Abu Qir bay).
pub const DEFAULT_BASE_LATITUDE: f64 = 31.31;
pub const DEFAULT_BASE_LONGITUDE: f64 = 29.90;
pub const DEFAULT_TOTAL_SAMPLES: usize = 150_000;
pub const DEFAULT_YEAR: i32 = 2024;
pub const MONTHS_PER_YEAR: usize = 12;
/// Largest accepted coordinate jitter, in degrees.
pub const MAX_COORDINATE_OFFSET: f64 = 1.0;

/// Shared configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Requested record count. Only `total_samples / 12 * 12` records are produced.
    pub total_samples: usize,
    pub year: i32,
    pub base_latitude: f64,
    pub base_longitude: f64,
    pub max_offset: f64,
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total_samples: DEFAULT_TOTAL_SAMPLES,
            year: DEFAULT_YEAR,
            base_latitude: DEFAULT_BASE_LATITUDE,
            base_longitude: DEFAULT_BASE_LONGITUDE,
            max_offset: crate::sampling::DEFAULT_MAX_OFFSET,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn samples_per_month(&self) -> usize {
        self.total_samples / MONTHS_PER_YEAR
    }

    /// Records lost to the integer division of the total across twelve months.
    pub fn dropped_remainder(&self) -> usize {
        self.total_samples % MONTHS_PER_YEAR
    }

    pub fn expected_records(&self) -> usize {
        self.samples_per_month() * MONTHS_PER_YEAR
    }

    /// Rejects configurations the generator cannot honour before any record is drawn.
    pub fn validate(&self) -> GenerationResult<()> {
        if self.total_samples == 0 {
            return Err(GenerationError::EmptySampleCount);
        }
        if !(0.0..=MAX_COORDINATE_OFFSET).contains(&self.max_offset) {
            return Err(GenerationError::InvalidOffset(self.max_offset));
        }
        if !(-90.0..=90.0).contains(&self.base_latitude)
            || !(-180.0..=180.0).contains(&self.base_longitude)
        {
            return Err(GenerationError::InvalidBasePosition(
                self.base_latitude,
                self.base_longitude,
            ));
        }
        // December rolls into January of the following year.
        let next_year = self.year.checked_add(1);
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none()
            || next_year
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                .is_none()
        {
            return Err(GenerationError::InvalidYear(self.year));
        }
        Ok(())
    }
}

/// Error type for dataset generation and output.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("sample count must be positive")]
    EmptySampleCount,
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    #[error("year {0} cannot be represented")]
    InvalidYear(i32),
    #[error("coordinate offset {0} must lie within 0..={max}", max = MAX_COORDINATE_OFFSET)]
    InvalidOffset(f64),
    #[error("base position ({0}, {1}) is not a valid latitude/longitude")]
    InvalidBasePosition(f64, f64),
    #[error("I/O error for dataset '{0}': {1}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to write dataset: {0}")]
    Csv(#[from] csv::Error),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Error type for externally reported live-telemetry payloads.
#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("no data found")]
    NoData,
    #[error("malformed telemetry payload: {0}")]
    Malformed(String),
    #[error("failed to parse telemetry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_run() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.total_samples, 150_000);
        assert_eq!(cfg.samples_per_month(), 12_500);
        assert_eq!(cfg.dropped_remainder(), 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn remainder_is_truncated() {
        let cfg = GeneratorConfig {
            total_samples: 100,
            ..Default::default()
        };
        assert_eq!(cfg.samples_per_month(), 8);
        assert_eq!(cfg.expected_records(), 96);
        assert_eq!(cfg.dropped_remainder(), 4);
    }

    #[test]
    fn validate_rejects_offsets_too_wide_to_sample() {
        for max_offset in [1e308, f64::INFINITY, f64::NAN, MAX_COORDINATE_OFFSET + 0.5] {
            let cfg = GeneratorConfig {
                total_samples: 12,
                max_offset,
                seed: Some(1),
                ..Default::default()
            };
            assert!(
                matches!(cfg.validate(), Err(GenerationError::InvalidOffset(_))),
                "offset {max_offset} should be rejected"
            );
        }

        let widest = GeneratorConfig {
            max_offset: MAX_COORDINATE_OFFSET,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero = GeneratorConfig {
            total_samples: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(GenerationError::EmptySampleCount)));

        let negative_offset = GeneratorConfig {
            max_offset: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            negative_offset.validate(),
            Err(GenerationError::InvalidOffset(_))
        ));

        let nan_base = GeneratorConfig {
            base_latitude: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_base.validate(),
            Err(GenerationError::InvalidBasePosition(..))
        ));

        let off_the_globe = GeneratorConfig {
            base_longitude: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            off_the_globe.validate(),
            Err(GenerationError::InvalidBasePosition(..))
        ));

        let far_future = GeneratorConfig {
            year: i32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            far_future.validate(),
            Err(GenerationError::InvalidYear(_))
        ));
    }
}
