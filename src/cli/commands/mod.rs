//! Command implementations for the trip analyzer CLI
//!
//! Each subcommand lives in its own module; `run` dispatches after logging
//! has been initialized for the selected command.

pub mod analyze;
pub mod check;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the trip analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `analyze`: full ingestion plus both ranked reports
/// - `check`: validation-only pass with acceptance statistics
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Analyze(analyze_args) => {
            shared::setup_logging(analyze_args.get_log_level());
            analyze::run_analyze(analyze_args)
        }
        Commands::Check(check_args) => {
            shared::setup_logging(check_args.get_log_level());
            check::run_check(check_args)
        }
    }
}
