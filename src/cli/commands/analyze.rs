//! Analyze command: ingest a trip file and print both ranked reports

use super::shared::create_ingest_spinner;
use crate::app::services::analyzer::TripAnalyzer;
use crate::cli::args::AnalyzeArgs;
use crate::cli::report::{AnalysisReport, write_output};
use crate::{Config, Result};
use tracing::info;

/// Run a full ingestion pass and emit the two ranked reports
pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    args.validate()?;
    let config = Config::default()
        .with_top_zones(args.top_zones)
        .with_top_slots(args.top_slots);
    let config = if args.show_progress() {
        config
    } else {
        config.without_progress()
    };

    let spinner = config
        .show_progress
        .then(|| create_ingest_spinner(&format!("Ingesting {}", args.input.display())));

    let mut analyzer = TripAnalyzer::new();
    let ingest = analyzer.ingest_file(&args.input)?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    info!(
        "Building reports: top {} zones, top {} slots",
        config.top_zones, config.top_slots
    );
    let report = AnalysisReport {
        top_zones: analyzer.top_zones(config.top_zones as i64),
        top_busy_slots: analyzer.top_busy_slots(config.top_slots as i64),
        ingest,
    };

    let rendered = report.render(&args.output_format)?;
    write_output(&rendered, args.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::constants::{DEFAULT_TOP_SLOTS, DEFAULT_TOP_ZONES};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_sample_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TripID,PZone,DZone,Time,Dist,Fare").unwrap();
        writeln!(file, "1,Downtown,Airport,2024-01-01 08:10,3.1,12.0").unwrap();
        writeln!(file, "2,Downtown,Harbor,2024-01-01 08:45,1.2,6.5").unwrap();
        writeln!(file, "3,Airport,Downtown,2024-01-01 17:00,3.1,12.0").unwrap();
        file
    }

    #[test]
    fn test_analyze_writes_report_file() {
        let input = write_sample_file();
        let output_dir = tempfile::TempDir::new().unwrap();
        let output_path = output_dir.path().join("report.json");

        let args = AnalyzeArgs {
            input: input.path().to_path_buf(),
            top_zones: DEFAULT_TOP_ZONES,
            top_slots: DEFAULT_TOP_SLOTS,
            output_format: OutputFormat::Json,
            output_file: Some(output_path.clone()),
            verbose: 0,
            quiet: true,
        };
        run_analyze(args).unwrap();

        let json = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["top_zones"][0]["zone"], "Downtown");
        assert_eq!(value["top_zones"][0]["count"], 2);
        assert_eq!(value["ingest"]["lines_accepted"], 3);
    }

    #[test]
    fn test_analyze_rejects_missing_input() {
        let args = AnalyzeArgs {
            input: std::path::PathBuf::from("/nonexistent/trips.csv"),
            top_zones: DEFAULT_TOP_ZONES,
            top_slots: DEFAULT_TOP_SLOTS,
            output_format: OutputFormat::Human,
            output_file: None,
            verbose: 0,
            quiet: true,
        };
        assert!(run_analyze(args).is_err());
    }
}
