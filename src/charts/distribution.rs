//! Cycle-length distribution chart: histogram, density overlay, mean marker

use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

use crate::charts::palette::{HISTOGRAM_FILL, KDE_LINE};
use crate::pipeline::{histogram, kde_curve};

/// Fixed bin count of the frequency histogram.
pub const BIN_COUNT: usize = 20;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const KDE_POINTS: usize = 200;

/// Render the cycle-length distribution chart to `path`.
///
/// The density overlay is scaled to count units (density * n * bin width)
/// so it shares the frequency axis, and the mean marker is labeled to one
/// decimal place.
pub fn render_distribution_chart(values: &[f64], mean: f64, path: &Path) -> Result<()> {
    if values.is_empty() {
        bail!("no cycle-length values to plot");
    }

    // Probe the output path up front; the bitmap backend defers file IO to present()
    std::fs::File::create(path)
        .with_context(|| format!("Cannot create chart file {}", path.display()))?;

    let bins = histogram(values, BIN_COUNT);
    let bin_width = bins[0].upper - bins[0].lower;
    let scale = values.len() as f64 * bin_width;
    let kde: Vec<(f64, f64)> = kde_curve(values, KDE_POINTS)?
        .into_iter()
        .map(|(x, d)| (x, d * scale))
        .collect();

    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let max_kde = kde.iter().map(|p| p.1).fold(0.0, f64::max);
    let y_max = (max_count.max(max_kde) * 1.1).max(1.0);

    let x_min = kde.first().map(|p| p.0).unwrap_or(bins[0].lower);
    let x_max = kde
        .last()
        .map(|p| p.0)
        .unwrap_or(bins[bins.len() - 1].upper);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Menstrual Cycle Lengths", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("Frequency")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 13))
        .draw()?;

    chart.draw_series(bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            HISTOGRAM_FILL.filled(),
        )
    }))?;

    chart.draw_series(LineSeries::new(kde, KDE_LINE.stroke_width(2)))?;

    chart
        .draw_series(DashedLineSeries::new(
            [(mean, 0.0), (mean, y_max)],
            8,
            5,
            RED.stroke_width(2),
        ))?
        .label(format!("Mean: {:.1} days", mean))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    Ok(())
}
