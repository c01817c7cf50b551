//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a clean test DataFrame with all seven designated columns plus a
/// passthrough identifier column.
pub fn create_cycle_dataframe() -> DataFrame {
    df! {
        "ClientID" => ["c01", "c02", "c03", "c04", "c05", "c06", "c07", "c08", "c09", "c10"],
        "CycleLength-1" => [29.0f64, 28.0, 30.0, 27.0, 29.0, 31.0, 26.0, 28.0, 33.0, 29.0],
        "CycleLength-2" => [30.0f64, 29.0, 28.0, 30.0, 27.0, 29.0, 31.0, 26.0, 28.0, 33.0],
        "CycleLength-3" => [27.0f64, 30.0, 29.0, 28.0, 30.0, 27.0, 29.0, 31.0, 26.0, 28.0],
        "CumulativeAverages" => [28.5f64, 29.0, 28.8, 28.6, 29.2, 28.4, 28.9, 29.5, 28.7, 29.1],
        "Age" => [24.0f64, 31.0, 27.0, 35.0, 29.0, 22.0, 41.0, 33.0, 26.0, 30.0],
        "BMI" => [21.4f64, 23.8, 19.9, 26.1, 22.5, 24.3, 20.7, 27.9, 23.0, 21.8],
        "LengthofCycle" => [28.0f64, 30.0, 27.0, 29.0, 31.0, 26.0, 28.0, 33.0, 29.0, 30.0],
    }
    .unwrap()
}

/// Create a DataFrame whose designated columns are strings with two
/// unparseable cells: a lone space (row 3) and "n/a" (row 4).
pub fn create_messy_cycle_dataframe() -> DataFrame {
    df! {
        "ClientID" => ["c01", "c02", "c03", "c04", "c05"],
        "CycleLength-1" => ["29", "28", " ", "27", "29"],
        "CycleLength-2" => ["30", "29", "28", "30", "27"],
        "CycleLength-3" => ["27", "30", "29", "28", "30"],
        "CumulativeAverages" => ["28.5", "29.0", "28.8", "n/a", "29.2"],
        "Age" => ["24", "31", "27", "35", "29"],
        "BMI" => ["21.4", "23.8", "19.9", "26.1", "22.5"],
        "LengthofCycle" => ["28", "30", "27", "29", "31"],
    }
    .unwrap()
}

/// Raw CSV text with twelve records; record 5 has a lone-space BMI cell and
/// record 9 a non-numeric Age cell, so exactly two rows should be dropped.
pub fn cycle_csv_text() -> String {
    let mut text = String::from(
        "ClientID,CycleLength-1,CycleLength-2,CycleLength-3,CumulativeAverages,Age,BMI,LengthofCycle\n",
    );
    text.push_str("c01,29,30,27,28.5,24,21.4,28\n");
    text.push_str("c02,28,29,30,29.0,31,23.8,30\n");
    text.push_str("c03,30,28,29,28.8,27,19.9,27\n");
    text.push_str("c04,27,30,28,28.6,35,26.1,29\n");
    text.push_str("c05,29,27,30,29.2,29, ,31\n");
    text.push_str("c06,31,29,27,28.4,22,24.3,26\n");
    text.push_str("c07,26,31,29,28.9,41,20.7,28\n");
    text.push_str("c08,28,26,31,29.5,33,27.9,33\n");
    text.push_str("c09,33,28,26,28.7,x,23.0,29\n");
    text.push_str("c10,29,33,28,29.1,30,21.8,30\n");
    text.push_str("c11,30,29,33,29.3,28,22.9,29\n");
    text.push_str("c12,28,30,29,28.9,36,25.2,27\n");
    text
}

/// Create a temporary directory with a CSV file holding `text` verbatim
pub fn write_csv_text(text: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("cycle_data.csv");
    std::fs::write(&csv_path, text).unwrap();
    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
