pub mod noise;
pub mod season;

pub use noise::{inject, Measurements, NoiseInjector};
pub use season::{Season, SeasonalBases, SeasonalProfile};
