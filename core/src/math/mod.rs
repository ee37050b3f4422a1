pub mod round;
pub mod stats;

pub use round::RoundHelper;
pub use stats::StatsHelper;
