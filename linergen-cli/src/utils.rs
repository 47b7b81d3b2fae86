//! Utility functions for CLI operations.

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)] // Fields consulted by individual commands as needed
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Write generated content to a file, or to stdout when no path is given.
///
/// File output always ends with a newline so the artifact is
/// shell-friendly.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let mut content = content.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            fs::write(path, content)?;
            Ok(())
        }
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
