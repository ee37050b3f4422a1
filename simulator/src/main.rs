use anyhow::Context;
use clap::Parser;
use divecore::classifier::SiteStatus;
use divecore::prelude::{DEFAULT_TOTAL_SAMPLES, DEFAULT_YEAR};
use std::fs;
use std::path::PathBuf;
use workflow::config::{WorkflowConfig, DEFAULT_OUTPUT};
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Synthetic dive-site telemetry dataset generator")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Requested record count, split evenly over twelve months
    #[arg(long, default_value_t = DEFAULT_TOTAL_SAMPLES)]
    samples: usize,
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    year: i32,
    /// Seed for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Also write the run summary as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.samples, args.year, args.seed, args.output)
    };

    let runner = Runner::new(workflow_config);
    let result = runner.execute()?;

    println!("Dataset generated: {}", result.output.display());
    println!(
        "Samples: {} (dropped remainder {})",
        result.records_written, result.dropped_remainder
    );
    for status in SiteStatus::ALL {
        println!("  {:<9} {}", status.as_str(), result.summary.count(status));
    }
    println!(
        "Mean temp {:.2} C, pH {:.2}, oxygen {:.2} mg/L",
        result.summary.mean_temp_c, result.summary.mean_ph, result.summary.mean_dissolved_oxygen
    );

    if let Some(report_path) = args.report {
        if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let report = serde_json::to_string_pretty(&result).context("serializing run report")?;
        fs::write(&report_path, report)
            .with_context(|| format!("writing run report {}", report_path.display()))?;
    }

    Ok(())
}
