pub mod coords;
pub mod temporal;

pub use coords::{sample_depth, CoordinateSampler, GeoPoint, DEFAULT_MAX_OFFSET};
pub use temporal::{month_bounds, sample_instant, seconds_in_month};
