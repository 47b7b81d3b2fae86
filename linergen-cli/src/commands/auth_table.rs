//! Command to generate the auth-table CSV artifact.

use crate::error::CliError;
use crate::utils::{write_output, GlobalOptions};
use clap::Args;
use linergen::{render_auth_table, AuthUser};
use std::path::PathBuf;

/// Generate the auth-table CSV artifact from a JSON user list.
#[derive(Args)]
pub struct AuthTableCommand {
    /// Users as a JSON array of objects with `username`, `password`, and
    /// optional `speed_limit` / `allow_*` flags
    #[arg(long, value_name = "JSON")]
    pub users: String,

    /// Write the table to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl AuthTableCommand {
    /// Execute the auth-table command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let users: Vec<AuthUser> = serde_json::from_str(&self.users).map_err(|e| {
            CliError::InvalidArguments(format!("--users must be a JSON array of users: {e}"))
        })?;

        let csv = render_auth_table(&users)?;
        write_output(self.output.as_deref(), &csv)
    }
}
