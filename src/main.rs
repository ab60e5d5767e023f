//! cmrun - configure, build and run a local CMake project
//!
//! A thin wrapper over the CMake command line. Each subcommand turns a few
//! options into one external process invocation and exits with that
//! process's status.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands/ → Dispatcher → CMake / built executable
//! ```

mod build;
mod cli;
mod commands;
mod config;
mod dispatcher;
mod error;
mod exec;
mod utils;

use clap::Parser;

use cli::Cli;
use error::CmrunError;
use utils::terminal;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(err) = cli.execute() {
        let code = match err.downcast_ref::<CmrunError>() {
            Some(cmrun_err) => {
                cmrun_err.display_with_hints(verbose);
                cmrun_err.exit_code()
            }
            None => {
                terminal::print_error(&format!("{:#}", err));
                1
            }
        };
        std::process::exit(code);
    }
}
