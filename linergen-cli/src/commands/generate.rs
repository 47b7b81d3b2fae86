//! Command to generate a configuration document from a named topology.

use crate::error::CliError;
use crate::utils::{write_output, GlobalOptions};
use clap::Args;
use linergen::{ConfigValidator, TemplateRequest};
use std::path::PathBuf;

/// Generate a configuration document from a named topology.
#[derive(Args)]
pub struct GenerateCommand {
    /// Topology name (http_forward, tunnel_server, tunnel_client, dns,
    /// full, sni, redsocks, stream, ssh, webshell)
    #[arg(long, value_name = "NAME")]
    pub template: String,

    /// Topology parameters as a JSON object
    #[arg(long, value_name = "JSON", default_value = "{}")]
    pub params: String,

    /// Write the document to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Decode the parameter bag
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::InvalidArguments(format!("--params must be valid JSON: {e}")))?;

        // 2. Select the topology and assemble the document
        let request = TemplateRequest::from_params(&self.template, params)?;
        let config = request.build()?;

        // 3. Validate before emitting anything; report the complete list
        let result = ConfigValidator::validate(&config);
        if !result.is_valid() {
            eprintln!(
                "Configuration validation failed, found {} error(s):",
                result.errors().len()
            );
            for (i, err) in result.errors().iter().enumerate() {
                eprintln!("{}. {err}", i + 1);
            }
            return Err(CliError::SemanticFailure(
                "generated configuration is invalid".to_string(),
            ));
        }

        // 4. Serialize and emit
        let yaml = config.to_yaml()?;
        write_output(self.output.as_deref(), &yaml)
    }
}
