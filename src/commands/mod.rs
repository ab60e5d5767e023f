//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.

pub mod all;
pub mod build;
pub mod cmake;
pub mod execute;
