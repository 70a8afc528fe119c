use clap::Parser;
use pyrome_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(stats) => {
            // Individual pyrome failures are reported in the batch summary;
            // surface them through the exit code
            if stats.files_failed > 0 {
                process::exit(1);
            }
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Pyrome Processor - Fire-Weather Climatology Converter");
    println!("=====================================================");
    println!();
    println!("Convert pyrome fire-weather climatology exports (FireFamilyPlus fire-risk");
    println!("files) into FlamMap wind and initial fuel-moisture input files.");
    println!();
    println!("USAGE:");
    println!("    pyrome-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert pyrome export files to .fms and wind summary outputs");
    println!("    inspect     Parse a single pyrome file and print its derived statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert everything in ./data into ./results:");
    println!("    pyrome-processor convert");
    println!();
    println!("    # Convert with custom paths, overwriting existing outputs:");
    println!("    pyrome-processor convert --input /path/to/exports --output /path/to/results --force");
    println!();
    println!("    # Check a single pyrome file:");
    println!("    pyrome-processor inspect data/PY_001.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pyrome-processor <COMMAND> --help");
}
