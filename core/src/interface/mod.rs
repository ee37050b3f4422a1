//! Data contracts shared with external collaborators: the classification
//! service's feature vector and the live-telemetry store's payload.

pub mod features;
pub mod live;

pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_ORDER};
pub use live::{latest_reading, parse_readings, LiveReading};
