//! Command dispatcher
//!
//! Turns each operation into exactly one external process invocation and
//! surfaces its result. Any failure aborts the operation; `all` stops at
//! the first failing step.

use crate::build::cmake::DEFAULT_JOBS;
use crate::build::BuildVariant;
use crate::config::ProjectLayout;
use crate::error::CmrunError;
use crate::exec::subprocess::{CommandLine, CommandRunner, SystemRunner};
use crate::utils::{paths, terminal};

/// Runs configure, build and execute steps for one project
pub struct Dispatcher<R = SystemRunner> {
    layout: ProjectLayout,
    runner: R,
    verbose: bool,
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn new(layout: ProjectLayout, runner: R, verbose: bool) -> Self {
        Self {
            layout,
            runner,
            verbose,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Echo, run and check a single command
    fn run(&self, command: CommandLine) -> Result<(), CmrunError> {
        terminal::print_command(&command);
        let result = self.runner.run(&command)?;

        if self.verbose {
            terminal::print_info(&format!(
                "finished in {:.2?} with exit code {}",
                result.duration, result.exit_code
            ));
        }

        if !result.success {
            return Err(CmrunError::ProcessFailed {
                command: command.to_string(),
                code: result.exit_code,
            });
        }

        Ok(())
    }

    /// Create the build directory if needed and run the CMake configure step
    pub fn configure(&self, extra: &[String]) -> Result<(), CmrunError> {
        let build_dir = &self.layout.build_dir;
        paths::ensure_dir(build_dir).map_err(|source| CmrunError::CreateDir {
            path: build_dir.clone(),
            source,
        })?;

        self.run(self.layout.cmake().configure_command(extra))
    }

    /// Build the executable target for `variant`
    pub fn build(
        &self,
        variant: BuildVariant,
        jobs: usize,
        extra: &[String],
    ) -> Result<(), CmrunError> {
        let command = self
            .layout
            .cmake()
            .build_command(&self.layout.executable, variant, jobs, extra);
        self.run(command)
    }

    /// Run the executable built for `variant`, without arguments
    ///
    /// Nothing is launched when the executable does not exist.
    pub fn execute(&self, variant: BuildVariant) -> Result<(), CmrunError> {
        let path = self.layout.executable_path(variant);
        if !path.exists() {
            return Err(CmrunError::MissingArtifact { path });
        }

        self.run(CommandLine::new(path))
    }

    /// Configure, build and execute in order, stopping at the first failure
    pub fn all(&self, variant: BuildVariant) -> Result<(), CmrunError> {
        self.configure(&[])?;
        self.build(variant, DEFAULT_JOBS, &[])?;
        self.execute(variant)
    }
}
