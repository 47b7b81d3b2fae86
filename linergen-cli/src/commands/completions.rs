//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell
//! completion scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary, as completions must reference it.
const BIN_NAME: &str = "linergen";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   linergen completions bash > ~/.local/share/bash-completion/completions/linergen"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(linergen completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   linergen completions zsh > ~/.zsh/completions/_linergen");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(linergen completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!(
                    "#   linergen completions fish > ~/.config/fish/completions/linergen.fish"
                );
                eprintln!("# Or add to config.fish:");
                eprintln!("#   linergen completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   linergen completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   linergen completions powershell | Out-String | Invoke-Expression");
            }
            _ => {
                // Other shells supported by clap_complete need no custom
                // instructions
            }
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
