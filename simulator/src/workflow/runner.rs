use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use divecore::dataset::{write_dataset, DatasetSummary};
use divecore::telemetry::StatusCounts;
use divecore::DatasetGenerator;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    pub output: PathBuf,
    pub records_written: usize,
    pub dropped_remainder: usize,
    pub status_counts: StatusCounts,
    pub summary: DatasetSummary,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Generates the full dataset in memory, then writes it in one pass.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let generator_config = self.config.to_generator_config();
        let dropped_remainder = generator_config.dropped_remainder();

        let mut generator =
            DatasetGenerator::new(generator_config).context("configuring dataset generator")?;
        let records = generator.generate().context("generating dataset")?;

        let output = self.config.output.clone();
        let records_written = write_dataset(&output, &records)
            .with_context(|| format!("writing dataset {}", output.display()))?;
        log::info!("wrote {} records to {}", records_written, output.display());

        Ok(WorkflowResult {
            output,
            records_written,
            dropped_remainder,
            status_counts: generator.metrics().snapshot(),
            summary: DatasetSummary::from_records(&records),
        })
    }
}
