//! Subprocess execution with inherited standard streams

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::CmrunError;

/// A program and its argument vector
///
/// Arguments are passed to the process as-is; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Arguments as lossy UTF-8 strings
    #[cfg(test)]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect()
    }
}

fn quote_for_display(word: &OsStr) -> String {
    let word = word.to_string_lossy();
    let needs_quotes = word.is_empty()
        || word
            .chars()
            .any(|c| c.is_whitespace() || "\"'\\$`&|;<>()*?!#~".contains(c));
    if needs_quotes {
        format!("\"{}\"", word.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        word.to_string()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote_for_display(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote_for_display(arg))?;
        }
        Ok(())
    }
}

/// Result of a subprocess execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: exit_code_of(status),
            duration,
        }
    }
}

/// Exit code of a finished process
///
/// A process killed by a signal reports 128 + signal number, as shells do.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Launches external processes
pub trait CommandRunner {
    /// Run `command` to completion
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`CommandResult::success`].
    fn run(&self, command: &CommandLine) -> Result<CommandResult, CmrunError>;
}

/// Runs commands on the host, inheriting stdin/stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Resolve a bare program name on PATH; paths are used as given
    fn resolve_program(program: &OsStr) -> Result<PathBuf, CmrunError> {
        let path = Path::new(program);
        if path.components().count() > 1 {
            return Ok(path.to_path_buf());
        }
        which::which(program).map_err(|_| CmrunError::missing_tool(program.to_string_lossy()))
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandResult, CmrunError> {
        let program = Self::resolve_program(&command.program)?;
        let start = Instant::now();

        let status = Command::new(&program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CmrunError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        Ok(CommandResult::from_status(status, start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_only_when_needed() {
        let cmd = CommandLine::new("cmake")
            .args(["-G", "Ninja Multi-Config", "--fresh"])
            .arg("-DNAME=a\"b");
        assert_eq!(
            cmd.to_string(),
            r#"cmake -G "Ninja Multi-Config" --fresh "-DNAME=a\"b""#
        );
    }

    #[test]
    fn test_missing_bare_program_is_missing_tool() {
        let err = SystemRunner
            .run(&CommandLine::new("cmrun-definitely-not-installed"))
            .unwrap_err();
        assert!(matches!(err, CmrunError::MissingTool { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_is_propagated() {
        let result = SystemRunner
            .run(&CommandLine::new("sh").args(["-c", "exit 3"]))
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_maps_to_shell_convention() {
        let result = SystemRunner
            .run(&CommandLine::new("sh").args(["-c", "kill -9 $$"]))
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 128 + 9);
    }
}
