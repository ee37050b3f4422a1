use crate::prelude::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature lapse per metre of depth, shared by every season.
pub const TEMP_LAPSE_PER_M: f64 = 0.05;
/// Exponential attenuation coefficient for light through the water column.
pub const LIGHT_ATTENUATION_PER_M: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

/// Month (index 0 = January) to season. The only place membership is defined.
const MONTH_SEASONS: [Season; 12] = [
    Season::Winter,
    Season::Winter,
    Season::Spring,
    Season::Spring,
    Season::Spring,
    Season::Summer,
    Season::Summer,
    Season::Summer,
    Season::Autumn,
    Season::Autumn,
    Season::Autumn,
    Season::Winter,
];

/// Baseline constants for one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalProfile {
    pub season: Season,
    pub surface_temp_c: f64,
    pub light_base: f64,
    pub turbidity_divisor: f64,
}

const WINTER: SeasonalProfile = SeasonalProfile {
    season: Season::Winter,
    surface_temp_c: 19.0,
    light_base: 800.0,
    turbidity_divisor: 4.0,
};

const SPRING: SeasonalProfile = SeasonalProfile {
    season: Season::Spring,
    surface_temp_c: 22.0,
    light_base: 1000.0,
    turbidity_divisor: 5.0,
};

const SUMMER: SeasonalProfile = SeasonalProfile {
    season: Season::Summer,
    surface_temp_c: 28.0,
    light_base: 1200.0,
    turbidity_divisor: 6.0,
};

const AUTUMN: SeasonalProfile = SeasonalProfile {
    season: Season::Autumn,
    surface_temp_c: 23.0,
    light_base: 900.0,
    turbidity_divisor: 5.0,
};

impl Season {
    pub fn for_month(month: u32) -> GenerationResult<Self> {
        month
            .checked_sub(1)
            .and_then(|index| MONTH_SEASONS.get(index as usize))
            .copied()
            .ok_or(GenerationError::InvalidMonth(month))
    }

    pub fn profile(self) -> &'static SeasonalProfile {
        match self {
            Season::Winter => &WINTER,
            Season::Spring => &SPRING,
            Season::Summer => &SUMMER,
            Season::Autumn => &AUTUMN,
        }
    }

    pub fn months(self) -> Vec<u32> {
        (1..=12u32)
            .filter(|&month| MONTH_SEASONS[(month - 1) as usize] == self)
            .collect()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        };
        f.pad(name)
    }
}

pub fn attenuate_light(surface_light: f64, depth_m: f64) -> f64 {
    surface_light * (-LIGHT_ATTENUATION_PER_M * depth_m).exp()
}

/// Un-noised baselines for one depth in one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalBases {
    pub base_temp_c: f64,
    /// Surface light before attenuation.
    pub light_base: f64,
    pub turbidity_base: f64,
}

impl SeasonalProfile {
    pub fn for_month(month: u32) -> GenerationResult<&'static SeasonalProfile> {
        Season::for_month(month).map(Season::profile)
    }

    pub fn base_temperature(&self, depth_m: f64) -> f64 {
        self.surface_temp_c - TEMP_LAPSE_PER_M * depth_m
    }

    pub fn turbidity_base(&self, depth_m: f64) -> f64 {
        depth_m / self.turbidity_divisor
    }

    /// Light reaching `depth_m` before noise and flooring.
    pub fn attenuated_light(&self, depth_m: f64) -> f64 {
        attenuate_light(self.light_base, depth_m)
    }

    pub fn bases(&self, depth_m: f64) -> SeasonalBases {
        SeasonalBases {
            base_temp_c: self.base_temperature(depth_m),
            light_base: self.light_base,
            turbidity_base: self.turbidity_base(depth_m),
        }
    }
}
