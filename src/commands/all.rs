//! Full pipeline: configure, build, then run

use anyhow::Result;
use clap::Args;

use crate::build::BuildVariant;
use crate::dispatcher::Dispatcher;
use crate::exec::subprocess::CommandRunner;

/// Run full pipeline: cmake -> build -> run
#[derive(Args, Debug)]
pub struct AllCommand {
    /// Build configuration
    #[arg(long, value_enum, ignore_case = true, default_value_t = BuildVariant::Debug)]
    pub config: BuildVariant,
}

impl AllCommand {
    /// Execute the pipeline
    pub fn execute<R: CommandRunner>(self, dispatcher: &Dispatcher<R>) -> Result<()> {
        dispatcher.all(self.config)?;
        Ok(())
    }
}
