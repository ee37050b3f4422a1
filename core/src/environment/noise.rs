use super::season::{attenuate_light, SeasonalBases};
use crate::math::RoundHelper;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TEMP_AMPLITUDE_RANGE: (f64, f64) = (0.5, 2.0);
pub const PH_SURFACE: f64 = 8.1;
pub const PH_LAPSE_PER_M: f64 = 0.003;
pub const PH_AMPLITUDE: f64 = 0.2;
pub const OXYGEN_SURFACE: f64 = 6.5;
pub const OXYGEN_LAPSE_PER_M: f64 = 0.05;
pub const OXYGEN_AMPLITUDE: f64 = 0.8;
pub const TURBIDITY_AMPLITUDE: f64 = 1.5;
pub const LIGHT_AMPLITUDE: f64 = 100.0;
pub const LIGHT_FLOOR: f64 = 50.0;
pub const CO2_RANGE_PPM: (f64, f64) = (400.0, 500.0);
pub const SALINITY_RANGE: (f64, f64) = (36.0, 38.0);

/// Returns `center` perturbed by a uniform draw from `[-amplitude, amplitude]`.
///
/// # Panics
///
/// If `amplitude` is negative or not finite: the draw range would be empty.
pub fn inject<R: Rng + ?Sized>(rng: &mut R, center: f64, amplitude: f64) -> f64 {
    debug_assert!(
        amplitude.is_finite() && amplitude >= 0.0,
        "noise amplitude must be finite and non-negative, got {amplitude}"
    );
    center + rng.gen_range(-amplitude..=amplitude)
}

/// One sample's physical measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temp_c: f64,
    pub ph: f64,
    pub salinity: f64,
    pub dissolved_oxygen: f64,
    pub co2_ppm: f64,
    pub light_intensity: f64,
    pub turbidity: f64,
}

impl Measurements {
    /// Applies the output precision: light and CO2 to 1 place, the rest to 2.
    pub fn rounded(&self) -> Self {
        Self {
            temp_c: RoundHelper::to_places(self.temp_c, 2),
            ph: RoundHelper::to_places(self.ph, 2),
            salinity: RoundHelper::to_places(self.salinity, 2),
            dissolved_oxygen: RoundHelper::to_places(self.dissolved_oxygen, 2),
            co2_ppm: RoundHelper::to_places(self.co2_ppm, 1),
            light_intensity: RoundHelper::to_places(self.light_intensity, 1),
            turbidity: RoundHelper::to_places(self.turbidity, 2),
        }
    }
}

/// Perturbs seasonal baselines into a full set of measurements.
pub struct NoiseInjector;

impl NoiseInjector {
    pub fn ph_center(depth_m: f64) -> f64 {
        PH_SURFACE - PH_LAPSE_PER_M * depth_m
    }

    pub fn oxygen_center(depth_m: f64) -> f64 {
        OXYGEN_SURFACE - OXYGEN_LAPSE_PER_M * depth_m
    }

    /// Draws every field for one sample. Values are unrounded.
    pub fn apply<R: Rng + ?Sized>(
        rng: &mut R,
        bases: &SeasonalBases,
        depth_m: f64,
    ) -> Measurements {
        let temp_amplitude = rng.gen_range(TEMP_AMPLITUDE_RANGE.0..=TEMP_AMPLITUDE_RANGE.1);
        let temp_c = inject(rng, bases.base_temp_c, temp_amplitude);
        let ph = inject(rng, Self::ph_center(depth_m), PH_AMPLITUDE);
        let dissolved_oxygen = inject(rng, Self::oxygen_center(depth_m), OXYGEN_AMPLITUDE);
        let turbidity = inject(rng, bases.turbidity_base, TURBIDITY_AMPLITUDE).abs();
        let attenuated = attenuate_light(bases.light_base, depth_m);
        let light_intensity = inject(rng, attenuated, LIGHT_AMPLITUDE).max(LIGHT_FLOOR);
        let co2_ppm = rng.gen_range(CO2_RANGE_PPM.0..=CO2_RANGE_PPM.1);
        let salinity = rng.gen_range(SALINITY_RANGE.0..=SALINITY_RANGE.1);

        Measurements {
            temp_c,
            ph,
            salinity,
            dissolved_oxygen,
            co2_ppm,
            light_intensity,
            turbidity,
        }
    }
}
