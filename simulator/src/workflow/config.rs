use anyhow::Context;
use divecore::prelude::{
    GeneratorConfig, DEFAULT_BASE_LATITUDE, DEFAULT_BASE_LONGITUDE, DEFAULT_TOTAL_SAMPLES,
    DEFAULT_YEAR,
};
use divecore::sampling::DEFAULT_MAX_OFFSET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "dive_site_dataset.csv";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub total_samples: usize,
    pub year: i32,
    pub base_latitude: f64,
    pub base_longitude: f64,
    pub max_offset: f64,
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            total_samples: DEFAULT_TOTAL_SAMPLES,
            year: DEFAULT_YEAR,
            base_latitude: DEFAULT_BASE_LATITUDE,
            base_longitude: DEFAULT_BASE_LONGITUDE,
            max_offset: DEFAULT_MAX_OFFSET,
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(total_samples: usize, year: i32, seed: Option<u64>, output: PathBuf) -> Self {
        Self {
            total_samples,
            year,
            seed,
            output,
            ..Default::default()
        }
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            total_samples: self.total_samples,
            year: self.year,
            base_latitude: self.base_latitude,
            base_longitude: self.base_longitude,
            max_offset: self.max_offset,
            seed: self.seed,
        }
    }
}
