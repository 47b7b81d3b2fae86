//! Build script for linergen-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release
//! builds.
//!
//! Note: We build a minimal command structure here rather than importing
//! from the main crate, since build scripts cannot depend on the crate
//! being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("linergen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate and validate liner proxy configurations")
        .long_about(
            "Command-line tool for generating and validating configuration documents \
             for the liner proxy",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("generate")
                .about("Generate a configuration document from a named topology")
                .long_about(
                    "Assemble a complete configuration document from a named topology \
                     and a JSON parameter bag, validate it, and emit YAML",
                ),
            Command::new("validate")
                .about("Validate a configuration document")
                .long_about(
                    "Check a configuration file for syntax and structural problems, \
                     reporting the complete violation list",
                ),
            Command::new("dialer")
                .about("Build a dialer table entry")
                .long_about("Build a named dialer URL from a connection kind and address"),
            Command::new("auth-table")
                .about("Generate the auth-table CSV artifact")
                .long_about("Render the fixed-format auth_user.csv from a JSON user list"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main linergen.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("linergen.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
