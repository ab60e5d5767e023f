//! Shared helpers for terminal output, paths and argument handling

pub mod args;
pub mod paths;
pub mod terminal;
