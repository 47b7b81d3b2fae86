//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AuthTableCommand, CompletionsCommand, DialerCommand, GenerateCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for generating and validating liner proxy
/// configurations.
#[derive(Parser)]
#[command(name = "linergen")]
#[command(version, about = "Generate and validate liner proxy configurations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a configuration document from a named topology
    Generate(GenerateCommand),

    /// Validate a configuration document
    Validate(ValidateCommand),

    /// Build a dialer table entry
    Dialer(DialerCommand),

    /// Generate the auth-table CSV artifact
    AuthTable(AuthTableCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
