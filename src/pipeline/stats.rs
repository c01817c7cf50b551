//! Descriptive statistics backing the distribution chart

use anyhow::{Context, Result};
use polars::prelude::*;
use statrs::distribution::{Continuous, Normal};

/// Extract a Float64 column as a plain vector, skipping nulls.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df
        .column(name)
        .with_context(|| format!("column '{}' not found", name))?
        .f64()
        .with_context(|| format!("column '{}' is not Float64", name))?;

    Ok(ca.into_iter().flatten().collect())
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Zero when fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

/// One equal-width histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bin `values` into `bin_count` equal-width bins spanning [min, max].
///
/// The maximum value is counted in the last bin rather than opening an
/// extra one.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / bin_count as f64
    } else {
        1.0
    };

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    bins
}

/// Scott's rule bandwidth for a Gaussian KDE: sigma * n^(-1/5).
pub fn scott_bandwidth(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 1.0;
    }
    let sd = std_dev(values);
    if sd == 0.0 {
        return 1.0;
    }
    sd * (n as f64).powf(-0.2)
}

/// Gaussian kernel density estimate evaluated on an even grid of `points`
/// positions spanning the data range extended by three bandwidths.
///
/// Returns (x, density) pairs; densities integrate to ~1 over the grid.
pub fn kde_curve(values: &[f64], points: usize) -> Result<Vec<(f64, f64)>> {
    if values.is_empty() || points < 2 {
        return Ok(Vec::new());
    }

    let kernel = Normal::new(0.0, 1.0)?;
    let h = scott_bandwidth(values);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * h;
    let hi = max + 3.0 * h;
    let step = (hi - lo) / (points - 1) as f64;
    let n = values.len() as f64;

    let curve = (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density = values.iter().map(|&v| kernel.pdf((x - v) / h)).sum::<f64>() / (n * h);
            (x, density)
        })
        .collect();

    Ok(curve)
}
