//! Command to validate a liner configuration document.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use linergen::ConfigValidator;
use std::path::PathBuf;

/// Validate a liner configuration document.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Read the raw text
        let contents = std::fs::read_to_string(&self.config_path)?;

        // 3. Syntax pre-check, decode, and structural walk. A syntax error
        //    short-circuits without producing a violation list.
        let result = match ConfigValidator::validate_text(&contents) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{e}");
                return Err(CliError::SemanticFailure(
                    "configuration file is not well-formed".to_string(),
                ));
            }
        };

        // 4. Report the complete violation list
        if result.is_valid() {
            println!("Configuration is valid");
            Ok(())
        } else {
            eprintln!(
                "Configuration validation failed, found {} error(s):",
                result.errors().len()
            );
            for (i, err) in result.errors().iter().enumerate() {
                eprintln!("{}. {err}", i + 1);
            }
            Err(CliError::SemanticFailure(
                "configuration validation failed".to_string(),
            ))
        }
    }
}
