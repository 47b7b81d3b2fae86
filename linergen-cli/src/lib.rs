//! Library exports for linergen-cli.
//!
//! This module exports the CLI structure so integration tests and tooling
//! can inspect the command tree without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for consumers
pub use cli::Cli;
