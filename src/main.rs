//! Cycleviz: cycle dataset cleaning and chart generation CLI
//!
//! Loads a CSV of menstrual-cycle records, cleans the designated numeric
//! columns, and renders a distribution chart and a correlation heatmap.

mod charts;
mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use charts::{render_correlation_heatmap, render_distribution_chart};
use cli::Cli;
use pipeline::{
    coerce_numeric, column_values, correlation_matrix, dataset_stats, drop_incomplete_rows,
    load_dataset, mean, DESIGNATED_COLUMNS, TARGET_COLUMN,
};
use report::RunSummary;
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(&cli.input, &cli.distribution_out, &cli.correlation_out);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols, memory_mb) = dataset_stats(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let mut summary = RunSummary::new(
        rows,
        cli.distribution_out.clone(),
        cli.correlation_out.clone(),
    );
    summary.set_load_time(step_start.elapsed());
    print_step_time(step_start.elapsed());

    // Step 2: Clean numeric columns
    print_step_header(2, "Clean Numeric Columns");

    let step_start = Instant::now();
    let coerced = coerce_numeric(&df, &DESIGNATED_COLUMNS)?;
    let cleaned = drop_incomplete_rows(&coerced, &DESIGNATED_COLUMNS)?;
    let rows_dropped = coerced.height() - cleaned.height();

    if rows_dropped == 0 {
        print_info("No rows with missing or non-numeric values");
    } else {
        print_count("row(s) with missing or non-numeric values", rows_dropped, None);
    }
    print_success("Numeric columns cleaned");

    summary.set_rows_dropped(rows_dropped);
    summary.set_clean_time(step_start.elapsed());
    print_step_time(step_start.elapsed());

    if cleaned.height() == 0 {
        anyhow::bail!("No complete rows remain after cleaning; cannot render charts");
    }

    // Step 3: Analyze
    print_step_header(3, "Analyze");

    let step_start = Instant::now();
    let values = column_values(&cleaned, TARGET_COLUMN)?;
    let mean_length = mean(&values);
    let (matrix, labels) = correlation_matrix(&cleaned, &DESIGNATED_COLUMNS)?;

    print_success(&format!("Mean cycle length: {:.1} days", mean_length));
    print_success(&format!(
        "Correlation matrix computed across {} features",
        labels.len()
    ));

    summary.set_mean_cycle_length(mean_length);
    summary.set_analysis_time(step_start.elapsed());
    print_step_time(step_start.elapsed());

    // Step 4: Render charts
    print_step_header(4, "Render Charts");

    let step_start = Instant::now();
    let spinner = create_spinner("Rendering distribution chart...");
    render_distribution_chart(&values, mean_length, &cli.distribution_out)?;
    finish_with_success(
        &spinner,
        &format!("Saved {}", cli.distribution_out.display()),
    );

    let spinner = create_spinner("Rendering correlation heatmap...");
    render_correlation_heatmap(&matrix, &labels, &cli.correlation_out)?;
    finish_with_success(&spinner, &format!("Saved {}", cli.correlation_out.display()));

    summary.set_render_time(step_start.elapsed());
    print_step_time(step_start.elapsed());

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}
