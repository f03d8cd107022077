//! Completions command implementation.

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::CliError;

/// Generate shell completion scripts.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self) -> Result<(), CliError> {
        let mut command = Cli::command();
        clap_complete::generate(self.shell, &mut command, "bookme", &mut std::io::stdout());
        Ok(())
    }
}
