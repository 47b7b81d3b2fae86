//! Command to build a dialer table entry.

use crate::error::CliError;
use crate::utils::{write_output, GlobalOptions};
use clap::Args;
use linergen::dialer::dialer_entry;
use linergen::Config;
use std::path::PathBuf;

/// Build a dialer table entry as a YAML snippet.
#[derive(Args)]
pub struct DialerCommand {
    /// Dialer name referenced from service blocks, e.g. `cloud`
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Connection kind (local, socks5, http2, http3, ssh, wss)
    #[arg(long, value_name = "KIND")]
    pub kind: String,

    /// Upstream address, e.g. `example.org:1080`; for the local kind an
    /// optional interface name
    #[arg(long, value_name = "ADDRESS", default_value = "")]
    pub address: String,

    /// Write the snippet to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl DialerCommand {
    /// Execute the dialer command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let (name, url) = dialer_entry(&self.name, &self.kind, &self.address)?;

        // Render through the document schema so the snippet can be pasted
        // directly under an existing `dialer:` table.
        let config = Config {
            dialer: [(name, url)].into_iter().collect(),
            ..Default::default()
        };
        let yaml = config.to_yaml().map_err(CliError::from)?;
        write_output(self.output.as_deref(), &yaml)
    }
}
