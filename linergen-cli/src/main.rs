//! Main entry point for the linergen CLI.
//!
//! This is the command-line interface for generating and validating liner
//! proxy configurations. It provides commands for:
//! - `generate`: Build a configuration document from a named topology
//! - `validate`: Check a configuration document for structural problems
//! - `dialer`: Build a dialer table entry
//! - `auth-table`: Generate the auth-table CSV artifact

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = linergen::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Generate(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Dialer(cmd) => cmd.execute(&global),
        cli::Command::AuthTable(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
