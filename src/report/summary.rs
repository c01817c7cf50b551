//! Run summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a cleaning-and-charting run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub mean_cycle_length: f64,
    pub distribution_path: PathBuf,
    pub correlation_path: PathBuf,
    load_time: Duration,
    clean_time: Duration,
    analysis_time: Duration,
    render_time: Duration,
}

impl RunSummary {
    pub fn new(rows_loaded: usize, distribution_path: PathBuf, correlation_path: PathBuf) -> Self {
        Self {
            rows_loaded,
            distribution_path,
            correlation_path,
            ..Default::default()
        }
    }

    pub fn set_rows_dropped(&mut self, rows: usize) {
        self.rows_dropped = rows;
    }

    pub fn set_mean_cycle_length(&mut self, mean: f64) {
        self.mean_cycle_length = mean;
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_clean_time(&mut self, elapsed: Duration) {
        self.clean_time = elapsed;
    }

    pub fn set_analysis_time(&mut self, elapsed: Duration) {
        self.analysis_time = elapsed;
    }

    pub fn set_render_time(&mut self, elapsed: Duration) {
        self.render_time = elapsed;
    }

    pub fn rows_retained(&self) -> usize {
        self.rows_loaded.saturating_sub(self.rows_dropped)
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.clean_time + self.analysis_time + self.render_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows Loaded"),
            Cell::new(self.rows_loaded),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Rows Dropped"),
            Cell::new(self.rows_dropped).fg(if self.rows_dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Rows Retained"),
            Cell::new(self.rows_retained())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📏 Mean Cycle Length"),
            Cell::new(format!("{:.1} days", self.mean_cycle_length))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📊 Distribution Chart"),
            Cell::new(self.distribution_path.display()),
        ]);

        table.add_row(vec![
            Cell::new("🔗 Correlation Chart"),
            Cell::new(self.correlation_path.display()),
        ]);

        table.add_row(vec![
            Cell::new("⏱ Total Time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
