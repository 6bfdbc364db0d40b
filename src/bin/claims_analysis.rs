//! Analysis driver: load a beneficiary file, run the battery, print the report

use anyhow::Context;
use clap::Parser;
use claims_stats::analysis::{run_analysis, AnalysisOptions};
use claims_stats::{load_from_path, Condition, DEFAULT_RESAMPLES};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compare condition costs and prevalence across patient subgroups
#[derive(Debug, Parser)]
#[command(name = "claims-analysis", version, about)]
struct Args {
    /// Beneficiary summary CSV
    input: PathBuf,

    /// First condition of the cost comparison
    #[arg(long, default_value = "stroke")]
    condition_a: String,

    /// Second condition of the cost comparison (the bootstrap reference)
    #[arg(long, default_value = "cancer")]
    condition_b: String,

    /// Condition whose prevalence is compared by sex and race
    #[arg(long, default_value = "diabetes")]
    prevalence: String,

    /// Bootstrap resample count
    #[arg(long, default_value_t = DEFAULT_RESAMPLES)]
    resamples: usize,

    /// Bootstrap seed for reproducible intervals
    #[arg(long)]
    seed: Option<u64>,

    /// Confidence level for the bootstrap intervals
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,
}

fn parse_condition(raw: &str) -> anyhow::Result<Condition> {
    raw.parse::<Condition>().map_err(anyhow::Error::msg)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let options = AnalysisOptions {
        condition_a: parse_condition(&args.condition_a)?,
        condition_b: parse_condition(&args.condition_b)?,
        prevalence_condition: parse_condition(&args.prevalence)?,
        resamples: args.resamples,
        seed: args.seed,
        confidence_level: args.confidence,
    };

    let records = load_from_path(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    info!(records = records.len(), "cohort loaded");

    let report = run_analysis(&records, &options)?;
    println!("{report}");
    Ok(())
}
