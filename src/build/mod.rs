//! Build orchestration on top of CMake
//!
//! The wrapper never computes a build graph itself; it only assembles the
//! command lines handed to CMake and to the built executable.

pub mod cmake;

use std::fmt;

use clap::ValueEnum;

/// Build configuration selected for an invocation
///
/// Selects both CMake's `--config` and the output subdirectory of a
/// multi-config generator (`<build-dir>/<variant>/`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BuildVariant {
    #[default]
    #[value(name = "Debug")]
    Debug,
    #[value(name = "Release")]
    Release,
}

impl BuildVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildVariant::Debug => "Debug",
            BuildVariant::Release => "Release",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
