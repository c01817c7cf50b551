//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Cycleviz - clean a cycle dataset and render distribution and correlation charts
#[derive(Parser, Debug)]
#[command(name = "cycleviz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file of cycle observations
    #[arg(short, long, default_value = "server/training/data/cycle_data.csv")]
    pub input: PathBuf,

    /// Output path for the cycle-length distribution chart
    #[arg(long, default_value = "cycle_distribution.png")]
    pub distribution_out: PathBuf,

    /// Output path for the feature-correlation heatmap
    #[arg(long, default_value = "feature_correlation.png")]
    pub correlation_out: PathBuf,

    /// Number of rows to use for schema inference (CSV only).
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}
