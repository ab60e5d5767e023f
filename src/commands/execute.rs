//! Execute command implementation
//!
//! Runs the executable produced by a previous build on the local host.

use anyhow::Result;
use clap::Args;

use crate::build::BuildVariant;
use crate::dispatcher::Dispatcher;
use crate::exec::subprocess::CommandRunner;
use crate::utils::terminal;

/// Run the executable
#[derive(Args, Debug)]
pub struct ExecuteCommand {
    /// Build configuration
    #[arg(long, value_enum, ignore_case = true, default_value_t = BuildVariant::Debug)]
    pub config: BuildVariant,

    /// Extra arguments (ignored; the executable runs without arguments)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub extra: String,
}

impl ExecuteCommand {
    /// Execute the run command
    pub fn execute<R: CommandRunner>(self, dispatcher: &Dispatcher<R>) -> Result<()> {
        if !self.extra.trim().is_empty() {
            terminal::print_warning(&format!(
                "--extra is ignored by execute: {}",
                self.extra
            ));
        }

        if dispatcher.verbose() {
            terminal::print_info(&format!(
                "Running {}",
                dispatcher.layout().executable_path(self.config).display()
            ));
        }

        dispatcher.execute(self.config)?;
        Ok(())
    }
}
