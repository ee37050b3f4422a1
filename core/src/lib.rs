//! Synthetic dive-site telemetry core.
//!
//! Generates labeled environmental readings (temperature, pH, salinity,
//! dissolved oxygen, CO2, light, turbidity) with seasonal baselines, bounded
//! noise and a running state that links each record to the one generated
//! before it. Records are classified by a fixed rule set and written as CSV.

pub mod classifier;
pub mod dataset;
pub mod environment;
pub mod generator;
pub mod interface;
pub mod math;
pub mod prelude;
pub mod sampling;
pub mod state;
pub mod telemetry;

pub use generator::{generate_dataset, DatasetGenerator};
pub use prelude::{GenerationError, GenerationResult, GeneratorConfig};
