//! CLI argument parsing using clap derive macros

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::build::cmake::DEFAULT_GENERATOR;
use crate::commands::{
    all::AllCommand, build::BuildCommand, cmake::CmakeCommand, execute::ExecuteCommand,
};
use crate::config::{LayoutOptions, ProjectLayout};
use crate::dispatcher::Dispatcher;
use crate::exec::subprocess::SystemRunner;
use crate::utils::terminal;

/// cmrun - configure, build and run a local CMake project
#[derive(Parser, Debug)]
#[command(name = "cmrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Project layout overrides
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Directory containing the top-level CMakeLists.txt
    #[arg(long, global = true, default_value = ".")]
    pub source_dir: PathBuf,

    /// Build output directory
    #[arg(long, global = true, default_value = "build")]
    pub build_dir: PathBuf,

    /// Target and executable name [default: name of the source directory]
    #[arg(long, global = true)]
    pub executable: Option<String>,

    /// CMake program to invoke
    #[arg(long, global = true, default_value = "cmake")]
    pub cmake: String,

    /// CMake generator
    #[arg(long, global = true, default_value = DEFAULT_GENERATOR)]
    pub generator: String,
}

impl From<LayoutArgs> for LayoutOptions {
    fn from(args: LayoutArgs) -> Self {
        Self {
            source_dir: args.source_dir,
            build_dir: args.build_dir,
            executable: args.executable,
            cmake: args.cmake,
            generator: args.generator,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run CMake configure
    Cmake(CmakeCommand),

    /// Build the project
    Build(BuildCommand),

    /// Run the executable
    Execute(ExecuteCommand),

    /// Run full pipeline: cmake -> build -> run
    All(AllCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            terminal::disable_colors();
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let layout = ProjectLayout::resolve(self.layout.into(), &cwd)?;

        if self.verbose {
            terminal::print_info(&format!(
                "source: {}, build: {}, executable: {}",
                layout.source_dir.display(),
                layout.build_dir.display(),
                layout.executable
            ));
        }

        let dispatcher = Dispatcher::new(layout, SystemRunner, self.verbose);

        // Execute the subcommand
        match self.command {
            Commands::Cmake(cmd) => cmd.execute(&dispatcher),
            Commands::Build(cmd) => cmd.execute(&dispatcher),
            Commands::Execute(cmd) => cmd.execute(&dispatcher),
            Commands::All(cmd) => cmd.execute(&dispatcher),
        }
    }
}
