//! Numeric coercion and row filtering for the designated columns

use anyhow::Result;
use polars::prelude::*;
use thiserror::Error;

/// The seven columns the pipeline treats as numeric measurements,
/// in the order they appear on the correlation axes.
pub const DESIGNATED_COLUMNS: [&str; 7] = [
    "CycleLength-1",
    "CycleLength-2",
    "CycleLength-3",
    "CumulativeAverages",
    "Age",
    "BMI",
    "LengthofCycle",
];

/// The column the distribution chart is drawn from.
pub const TARGET_COLUMN: &str = "LengthofCycle";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),
}

/// Coerce each designated column to Float64.
///
/// The cast is permissive: a cell that does not parse as a number becomes
/// null rather than raising an error. Columns outside `columns` are left
/// untouched.
pub fn coerce_numeric(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut df = df.clone();

    for name in columns {
        let column = df
            .column(name)
            .map_err(|_| SchemaError::MissingColumn((*name).to_string()))?;
        let coerced = column.cast(&DataType::Float64)?;
        df.replace(name, coerced.as_materialized_series().clone())?;
    }

    Ok(df)
}

/// Remove every row holding a null or non-finite value in any of `columns`.
///
/// Silent-filter design: rows are dropped without per-row reporting. The
/// caller can diff row counts for an aggregate.
pub fn drop_incomplete_rows(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];

    for name in columns {
        let column = df
            .column(name)
            .map_err(|_| SchemaError::MissingColumn((*name).to_string()))?;
        let ca = column.f64()?;

        for (idx, value) in ca.iter().enumerate() {
            match value {
                Some(v) if v.is_finite() => {}
                _ => keep[idx] = false,
            }
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}
