//! Chart colors and the diverging colormap for the heatmap

use plotters::style::RGBColor;

/// Histogram bar fill, the rose tone of the original charts.
pub const HISTOGRAM_FILL: RGBColor = RGBColor(232, 180, 184);

/// Density overlay line, a darker shade of the bar fill.
pub const KDE_LINE: RGBColor = RGBColor(186, 118, 124);

// Diverging colormap anchors: cool blue through neutral gray to warm red.
const COOL: RGBColor = RGBColor(59, 76, 192);
const NEUTRAL: RGBColor = RGBColor(221, 221, 221);
const WARM: RGBColor = RGBColor(180, 4, 38);

fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    RGBColor(
        (a.0 as f64 + (b.0 as f64 - a.0 as f64) * t).round() as u8,
        (a.1 as f64 + (b.1 as f64 - a.1 as f64) * t).round() as u8,
        (a.2 as f64 + (b.2 as f64 - a.2 as f64) * t).round() as u8,
    )
}

/// Map a correlation in [-1, 1] onto the diverging palette.
///
/// Non-finite values (a constant column's correlation) render as neutral.
pub fn diverging_color(value: f64) -> RGBColor {
    if !value.is_finite() {
        return NEUTRAL;
    }
    let v = value.clamp(-1.0, 1.0);
    if v < 0.0 {
        lerp(NEUTRAL, COOL, -v)
    } else {
        lerp(NEUTRAL, WARM, v)
    }
}

/// Annotation color with enough contrast against a cell: black on light
/// cells, white on saturated ones.
pub fn annotation_color(cell: RGBColor) -> RGBColor {
    let luminance =
        0.299 * cell.0 as f64 + 0.587 * cell.1 as f64 + 0.114 * cell.2 as f64;
    if luminance < 140.0 {
        RGBColor(255, 255, 255)
    } else {
        RGBColor(0, 0, 0)
    }
}
