//! Configure command implementation

use anyhow::Result;
use clap::Args;

use crate::dispatcher::Dispatcher;
use crate::exec::subprocess::CommandRunner;
use crate::utils::args::split_extra;

/// Run CMake configure
#[derive(Args, Debug)]
pub struct CmakeCommand {
    /// Extra arguments appended to the configure command line
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub extra: String,
}

impl CmakeCommand {
    /// Execute the configure command
    pub fn execute<R: CommandRunner>(self, dispatcher: &Dispatcher<R>) -> Result<()> {
        let extra = split_extra(&self.extra)?;
        dispatcher.configure(&extra)?;
        Ok(())
    }
}
