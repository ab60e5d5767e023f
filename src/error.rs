//! Error types and helpers for user-friendly error messages
//!
//! Every failure is fatal to the current invocation. The variants only
//! differ in the exit code they map to and in the hint shown to the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring, building or running the project
#[derive(Error, Debug)]
pub enum CmrunError {
    /// An external process ran and returned a non-zero status
    #[error("`{command}` exited with code {code}")]
    ProcessFailed { command: String, code: i32 },

    /// The executable expected by `execute` has not been built
    #[error("Executable not found: {}", path.display())]
    MissingArtifact { path: PathBuf },

    /// Tool not found on PATH
    #[error("Missing tool: {tool}")]
    MissingTool { tool: String, hint: String },

    /// The process could not be started at all
    #[error("Failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create build directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `--extra` could not be split into arguments
    #[error("Invalid extra arguments: {message}")]
    InvalidExtra { message: String },
}

impl CmrunError {
    /// Create a missing tool error, with an install hint for known tools
    pub fn missing_tool(tool: impl Into<String>) -> Self {
        let tool = tool.into();
        let hint = if tool == "cmake" || tool.ends_with("/cmake") {
            hints::cmake().to_string()
        } else {
            format!("Make sure `{}` is installed and available on PATH.", tool)
        };
        Self::MissingTool { tool, hint }
    }

    /// Exit code the CLI terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CmrunError::ProcessFailed { code, .. } => *code,
            CmrunError::MissingTool { .. } => 127,
            CmrunError::MissingArtifact { .. }
            | CmrunError::Spawn { .. }
            | CmrunError::CreateDir { .. }
            | CmrunError::InvalidExtra { .. } => 1,
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            CmrunError::MissingTool { hint, .. } => Some(hint.clone()),
            CmrunError::MissingArtifact { .. } => Some(hints::missing_artifact().to_string()),
            CmrunError::InvalidExtra { .. } => Some(hints::extra_quoting().to_string()),
            _ => None,
        }
    }

    /// Display error with formatting and hints
    ///
    /// A failed external process has already reported on its own streams,
    /// so it is only echoed in verbose mode.
    pub fn display_with_hints(&self, verbose: bool) {
        use console::style;

        if let CmrunError::ProcessFailed { .. } = self {
            if verbose {
                eprintln!("{} {}", style("ERROR:").red().bold(), self);
            }
            return;
        }

        eprintln!("{} {}", style("ERROR:").red().bold(), self);

        if verbose {
            let mut source = std::error::Error::source(self);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
        }

        if let Some(hint) = self.hint() {
            eprintln!("{} {}", style("HINT:").yellow().bold(), hint);
        }
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake\n\
         \n\
         Or point at a specific binary with --cmake <PATH>."
    }

    /// Get hint for an executable that was never built
    pub fn missing_artifact() -> &'static str {
        "Build the project first:\n\
         • Run: cmrun cmake && cmrun build --config <Debug|Release>\n\
         • Or run the whole pipeline: cmrun all --config <Debug|Release>"
    }

    /// Get hint for unbalanced quotes in --extra
    pub fn extra_quoting() -> &'static str {
        "Check that every quote in --extra is closed, e.g. --extra '-DNAME=\"a b\"'"
    }
}
