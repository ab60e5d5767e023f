//! Terminal output utilities

use console::style;

use crate::exec::subprocess::CommandLine;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message to stderr
pub fn print_info(message: &str) {
    eprintln!("{}: {}", style("info").blue().bold(), message);
}

/// Echo a command line before it is launched
pub fn print_command(command: &CommandLine) {
    println!("{} {}", style(">").dim().bold(), command);
}

/// Disable colored output on both streams
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}
