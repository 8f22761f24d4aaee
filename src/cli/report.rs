//! Report rendering for CLI output
//!
//! Turns ranked query results and ingestion statistics into human, JSON,
//! or CSV text. Rendering never touches the aggregate state; commands hand
//! over finished values.

use crate::app::models::{SlotCount, ZoneCount};
use crate::app::services::trip_parser::IngestStats;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Complete output of one analyze run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Busiest pickup zones, best first
    pub top_zones: Vec<ZoneCount>,

    /// Busiest (zone, hour) slots, best first
    pub top_busy_slots: Vec<SlotCount>,

    /// Ingestion pass statistics
    pub ingest: IngestStats,
}

impl AnalysisReport {
    /// Render the report in the requested format
    pub fn render(&self, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(self.render_human()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    fn render_human(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "Busiest pickup zones".bold()));
        if self.top_zones.is_empty() {
            out.push_str("  (no zones)\n");
        }
        for (rank, entry) in self.top_zones.iter().enumerate() {
            out.push_str(&format!(
                "  {:>3}. {:<32} {:>10}\n",
                rank + 1,
                entry.zone,
                entry.count.to_string().yellow()
            ));
        }

        out.push_str(&format!("\n{}\n", "Busiest (zone, hour) slots".bold()));
        if self.top_busy_slots.is_empty() {
            out.push_str("  (no slots)\n");
        }
        for (rank, entry) in self.top_busy_slots.iter().enumerate() {
            out.push_str(&format!(
                "  {:>3}. {:<32} {:02}:00 {:>10}\n",
                rank + 1,
                entry.zone,
                entry.hour,
                entry.count.to_string().yellow()
            ));
        }

        out.push('\n');
        out.push_str(&render_stats_line(&self.ingest));
        out
    }

    fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["kind", "zone", "hour", "count"])?;
        for entry in &self.top_zones {
            let count = entry.count.to_string();
            writer.write_record(["zone", entry.zone.as_str(), "", count.as_str()])?;
        }
        for entry in &self.top_busy_slots {
            let hour = entry.hour.to_string();
            let count = entry.count.to_string();
            writer.write_record(["slot", entry.zone.as_str(), hour.as_str(), count.as_str()])?;
        }
        csv_into_string(writer)
    }
}

/// Render a check run's acceptance statistics
pub fn render_check(stats: &IngestStats, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format!(
            "{}\n{}",
            "Trip file check".bold(),
            render_stats_line(stats)
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["lines_seen", "lines_accepted", "lines_rejected"])?;
            writer.write_record([
                stats.lines_seen.to_string(),
                stats.lines_accepted.to_string(),
                stats.lines_rejected.to_string(),
            ])?;
            csv_into_string(writer)
        }
    }
}

/// Write rendered output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn render_stats_line(stats: &IngestStats) -> String {
    format!(
        "Ingested {} lines: {} accepted, {} rejected ({:.1}% acceptance)\n",
        stats.lines_seen,
        stats.lines_accepted.to_string().green(),
        stats.lines_rejected.to_string().red(),
        stats.acceptance_rate()
    )
}

fn csv_into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::report_output("CSV writer flush failed", Box::new(e.into_error())))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::report_output("CSV output was not valid UTF-8", Box::new(e)))
}
