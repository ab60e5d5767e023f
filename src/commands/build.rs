//! Build command implementation

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Args;

use crate::build::cmake::DEFAULT_JOBS;
use crate::build::BuildVariant;
use crate::dispatcher::Dispatcher;
use crate::exec::subprocess::CommandRunner;
use crate::utils::args::split_extra;

/// Build the project
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Build configuration
    #[arg(long, value_enum, ignore_case = true, default_value_t = BuildVariant::Debug)]
    pub config: BuildVariant,

    /// Number of parallel jobs
    #[arg(short, long, default_value_t = DEFAULT_JOBS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub jobs: usize,

    /// Extra arguments appended to the build command line
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub extra: String,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute<R: CommandRunner>(self, dispatcher: &Dispatcher<R>) -> Result<()> {
        let extra = split_extra(&self.extra)?;
        dispatcher.build(self.config, self.jobs, &extra)?;
        Ok(())
    }
}
