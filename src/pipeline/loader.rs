//! Dataset loader for CSV files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load a CSV dataset into memory.
///
/// `infer_schema_length` controls how many rows are scanned for type
/// inference; 0 means a full table scan.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let infer_len = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(infer_len)
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?;

    Ok(df)
}

/// Row count, column count, and estimated memory footprint in MB.
pub fn dataset_stats(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}
