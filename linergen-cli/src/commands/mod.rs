//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `generate`: Build a configuration document from a named topology
//! - `validate`: Check a configuration document for structural problems
//! - `dialer`: Build a dialer table entry
//! - `auth_table`: Generate the auth-table CSV artifact
//! - `completions`: Generate shell completion scripts

pub mod auth_table;
pub mod completions;
pub mod dialer;
pub mod generate;
pub mod validate;

pub use auth_table::AuthTableCommand;
pub use completions::CompletionsCommand;
pub use dialer::DialerCommand;
pub use generate::GenerateCommand;
pub use validate::ValidateCommand;
