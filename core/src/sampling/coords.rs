use crate::math::RoundHelper;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_OFFSET: f64 = 0.01;
pub const COORDINATE_PLACES: u32 = 6;

pub const MIN_DEPTH_M: f64 = 2.0;
pub const MAX_DEPTH_M: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Jitters a fixed base position by a bounded uniform offset per axis.
#[derive(Debug, Clone)]
pub struct CoordinateSampler {
    base: GeoPoint,
    max_offset: f64,
}

impl CoordinateSampler {
    /// # Panics
    ///
    /// If `max_offset` is negative or not finite. `GeneratorConfig::validate`
    /// rejects such offsets before a sampler is built.
    pub fn new(base: GeoPoint, max_offset: f64) -> Self {
        debug_assert!(
            max_offset.is_finite() && max_offset >= 0.0,
            "coordinate offset must be finite and non-negative, got {max_offset}"
        );
        Self { base, max_offset }
    }

    pub fn base(&self) -> GeoPoint {
        self.base
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GeoPoint {
        GeoPoint {
            latitude: jitter(rng, self.base.latitude, self.max_offset),
            longitude: jitter(rng, self.base.longitude, self.max_offset),
        }
    }
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, base: f64, max_offset: f64) -> f64 {
    let offset = rng.gen_range(-max_offset..=max_offset);
    RoundHelper::to_places(base + offset, COORDINATE_PLACES)
}

/// Draws a dive depth in metres, rounded to centimetres.
pub fn sample_depth<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    RoundHelper::to_places(rng.gen_range(MIN_DEPTH_M..=MAX_DEPTH_M), 2)
}
