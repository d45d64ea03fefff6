use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use larix_io::CsvReader;
use larix_metrics::{clean, filter, ErrorMetrics, EvalConfig};

#[derive(Parser)]
#[command(name = "larix")]
#[command(about = "Per-entity regression error report over a CSV predictions file")]
#[command(version)]
struct Cli {
    /// Path to the input CSV file
    #[arg(long)]
    data: PathBuf,

    /// Entity identifier to filter rows on
    #[arg(long, default_value = "tree_7")]
    target: String,

    /// Name of the entity identifier column
    #[arg(long, default_value = "tree_name")]
    entity_column: String,

    /// Name of the predicted value column
    #[arg(long, default_value = "predicted_value")]
    predicted_column: String,

    /// Name of the true value column
    #[arg(long, default_value = "true_value")]
    true_column: String,

    /// Emit the report as pretty-printed JSON instead of labeled text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    target: &'a str,
    n_samples: usize,
    mse: f64,
    mar: f64,
    rmse: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_level = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter_level)
        .with_writer(std::io::stderr)
        .init();

    let config = EvalConfig::new(cli.target.clone())
        .context("invalid target identifier")?
        .with_entity_column(cli.entity_column)
        .with_predicted_column(cli.predicted_column)
        .with_true_column(cli.true_column);

    // Load
    let dataset = CsvReader::new(&cli.data)
        .read()
        .context("failed to read input CSV")?;
    info!(n_rows = dataset.n_rows(), "dataset loaded");

    // Validate schema
    let schema = config
        .resolve_schema(&dataset)
        .context("input CSV does not match the required schema")?;

    // Filter and clean
    let subset = filter(&dataset, schema, config.target());
    info!(n_matched = subset.rows.len(), "rows matched target");
    let samples = clean(&subset);

    // Compute
    let metrics = ErrorMetrics::compute(&samples)
        .context("metric computation failed")?;

    // Report
    if cli.json {
        let output = ReportOutput {
            target: config.target(),
            n_samples: metrics.n_samples,
            mse: metrics.mse,
            mar: metrics.mar,
            rmse: metrics.rmse,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Metrics for {}:", config.target());
        println!("{metrics}");
    }

    Ok(())
}
