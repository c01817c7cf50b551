//! Pairwise Pearson correlation across the designated columns

use anyhow::{Context, Result};
use faer::Mat;
use polars::prelude::*;

/// Compute the Pearson correlation matrix for `columns`, in the given order.
///
/// Each pair is accumulated in a single pass (Welford's method) for
/// numerical stability. The diagonal is exactly 1.0 and the matrix is
/// symmetric by construction. A pair involving a constant column yields NaN,
/// matching the convention of tabular statistics libraries.
pub fn correlation_matrix(df: &DataFrame, columns: &[&str]) -> Result<(Mat<f64>, Vec<String>)> {
    let float_columns: Vec<(String, Column)> = columns
        .iter()
        .map(|name| {
            let column = df
                .column(name)
                .with_context(|| format!("column '{}' not found", name))?
                .cast(&DataType::Float64)
                .with_context(|| format!("column '{}' cannot be cast to Float64", name))?;
            Ok(((*name).to_string(), column))
        })
        .collect::<Result<_>>()?;

    let n = float_columns.len();
    let mut matrix = Mat::<f64>::zeros(n, n);

    for i in 0..n {
        matrix[(i, i)] = 1.0;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let corr = pearson_correlation(&float_columns[i].1, &float_columns[j].1)
                .unwrap_or(f64::NAN);
            matrix[(i, j)] = corr;
            matrix[(j, i)] = corr;
        }
    }

    let names = float_columns.into_iter().map(|(name, _)| name).collect();
    Ok((matrix, names))
}

/// Single-pass Pearson correlation between two Float64 columns.
///
/// Positions where either side is null are skipped. Returns None when fewer
/// than two complete pairs remain or either side has zero variance.
pub fn pearson_correlation(s1: &Column, s2: &Column) -> Option<f64> {
    let ca1 = s1.f64().ok()?;
    let ca2 = s2.f64().ok()?;

    if ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0usize;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n as f64;
            mean_y += dy / n as f64;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2 {
        return None;
    }

    let std_x = (var_x / n as f64).sqrt();
    let std_y = (var_y / n as f64).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (n as f64 * std_x * std_y))
}
