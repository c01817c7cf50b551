//! Integration tests for the full load → clean → analyze → render pipeline

use cycleviz::charts::{render_correlation_heatmap, render_distribution_chart};
use cycleviz::pipeline::{
    coerce_numeric, column_values, correlation_matrix, drop_incomplete_rows, load_dataset, mean,
    DESIGNATED_COLUMNS, TARGET_COLUMN,
};
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_full_pipeline_end_to_end() {
    let (_temp_dir, csv_path) = common::write_csv_text(&common::cycle_csv_text());
    let out_dir = TempDir::new().unwrap();

    // Load
    let df = load_dataset(&csv_path, 100).unwrap();
    assert_eq!(df.height(), 12);

    // Clean: two malformed records go
    let coerced = coerce_numeric(&df, &DESIGNATED_COLUMNS).unwrap();
    let cleaned = drop_incomplete_rows(&coerced, &DESIGNATED_COLUMNS).unwrap();
    assert_eq!(cleaned.height(), 10);

    // Analyze
    let values = column_values(&cleaned, TARGET_COLUMN).unwrap();
    let mean_length = mean(&values);
    assert!(mean_length.is_finite());

    let (matrix, labels) = correlation_matrix(&cleaned, &DESIGNATED_COLUMNS).unwrap();
    assert_eq!(labels.len(), 7);

    // Render
    let distribution = out_dir.path().join("cycle_distribution.png");
    let correlation = out_dir.path().join("feature_correlation.png");
    render_distribution_chart(&values, mean_length, &distribution).unwrap();
    render_correlation_heatmap(&matrix, &labels, &correlation).unwrap();

    assert!(distribution.exists());
    assert!(correlation.exists());
}

#[test]
fn test_pipeline_is_deterministic_across_runs() {
    let (_temp_dir, csv_path) = common::write_csv_text(&common::cycle_csv_text());

    let run = || {
        let df = load_dataset(&csv_path, 100).unwrap();
        let coerced = coerce_numeric(&df, &DESIGNATED_COLUMNS).unwrap();
        let cleaned = drop_incomplete_rows(&coerced, &DESIGNATED_COLUMNS).unwrap();
        let values = column_values(&cleaned, TARGET_COLUMN).unwrap();
        (mean(&values), correlation_matrix(&cleaned, &DESIGNATED_COLUMNS).unwrap().0)
    };

    let (mean_a, matrix_a) = run();
    let (mean_b, matrix_b) = run();

    assert_eq!(mean_a.to_bits(), mean_b.to_bits());
    for i in 0..7 {
        for j in 0..7 {
            assert_eq!(matrix_a[(i, j)].to_bits(), matrix_b[(i, j)].to_bits());
        }
    }
}
