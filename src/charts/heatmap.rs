//! Feature-correlation heatmap: color-mapped grid with annotated cells

use anyhow::{bail, Context, Result};
use faer::Mat;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::charts::palette::{annotation_color, diverging_color};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;

/// Render the correlation matrix as an annotated heatmap at `path`.
///
/// Row 0 of the matrix is drawn at the top, as the feature order reads.
/// Cell annotations show the correlation to two decimal places.
pub fn render_correlation_heatmap(matrix: &Mat<f64>, labels: &[String], path: &Path) -> Result<()> {
    let n = labels.len();
    if n == 0 || matrix.nrows() != n || matrix.ncols() != n {
        bail!(
            "correlation matrix is {}x{} but {} labels were given",
            matrix.nrows(),
            matrix.ncols(),
            n
        );
    }

    // Probe the output path up front; the bitmap backend defers file IO to present()
    std::fs::File::create(path)
        .with_context(|| format!("Cannot create chart file {}", path.display()))?;

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Feature Correlation Matrix", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(150)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;

    let x_names = labels.to_vec();
    let y_names = labels.to_vec();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => x_names[*i].clone(),
            _ => String::new(),
        })
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => y_names[n - 1 - *i].clone(),
            _ => String::new(),
        })
        .label_style(("sans-serif", 13))
        .draw()?;

    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let color = diverging_color(matrix[(i, j)]);
            let row = n - 1 - i;
            cells.push(Rectangle::new(
                [
                    (SegmentValue::Exact(j), SegmentValue::Exact(row)),
                    (SegmentValue::Exact(j + 1), SegmentValue::Exact(row + 1)),
                ],
                color.filled(),
            ));
        }
    }
    chart.draw_series(cells)?;

    for i in 0..n {
        for j in 0..n {
            let value = matrix[(i, j)];
            let text_color = annotation_color(diverging_color(value));
            let style = TextStyle::from(("sans-serif", 16).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center))
                .color(&text_color);
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", value),
                (SegmentValue::CenterOf(j), SegmentValue::CenterOf(n - 1 - i)),
                style,
            )))?;
        }
    }

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    Ok(())
}
