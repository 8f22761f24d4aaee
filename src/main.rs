use clap::Parser;
use std::process;
use trip_analyzer::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the command has already written its report
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Trip Analyzer - Pickup Zone Activity Ranking");
    println!("============================================");
    println!();
    println!("Ingest a delimited trip-record file in one strict pass and produce");
    println!("exact ranked reports of the busiest pickup zones and (zone, hour) slots.");
    println!();
    println!("USAGE:");
    println!("    trip-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Ingest a trip file and print both ranked reports");
    println!("    check       Validate a trip file and report acceptance statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Top 10 zones and slots from a trip file:");
    println!("    trip-analyzer analyze trips.csv");
    println!();
    println!("    # Larger reports as JSON written to a file:");
    println!("    trip-analyzer analyze trips.csv --top-zones 50 --top-slots 25 \\");
    println!("                           --format json -o report.json");
    println!();
    println!("    # Acceptance statistics only:");
    println!("    trip-analyzer check trips.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trip-analyzer <COMMAND> --help");
}
