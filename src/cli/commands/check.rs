//! Check command: validation-only pass over a trip file

use crate::app::services::analyzer::TripAnalyzer;
use crate::cli::args::CheckArgs;
use crate::cli::report::{render_check, write_output};
use crate::Result;

/// Run a validation pass and report acceptance statistics
///
/// The aggregate is built and discarded; only the line counters are shown.
pub fn run_check(args: CheckArgs) -> Result<()> {
    args.validate()?;

    let mut analyzer = TripAnalyzer::new();
    let stats = analyzer.ingest_file(&args.input)?;

    let rendered = render_check(&stats, &args.output_format)?;
    write_output(&rendered, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_accepts_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1,A,B,2024-01-01 08:00,1,2").unwrap();
        writeln!(file, "garbage line").unwrap();

        let args = CheckArgs {
            input: file.path().to_path_buf(),
            output_format: OutputFormat::Json,
            verbose: 0,
        };
        assert!(run_check(args).is_ok());
    }

    #[test]
    fn test_check_rejects_missing_file() {
        let args = CheckArgs {
            input: std::path::PathBuf::from("/nonexistent/trips.csv"),
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(run_check(args).is_err());
    }
}
