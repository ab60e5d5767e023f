//! CMake command line construction
//!
//! Flag names and their order are CMake's command-line contract and must
//! not change: `-G`, `--fresh`, `-S`, `-B` for configure and `--build`,
//! `--target`, `--config`, `-j` for build.

use std::ffi::OsString;
use std::path::PathBuf;

use super::BuildVariant;
use crate::exec::subprocess::CommandLine;

/// Generator used when none is given
pub const DEFAULT_GENERATOR: &str = "Ninja Multi-Config";

/// Parallel jobs passed to `cmake --build` by default
pub const DEFAULT_JOBS: usize = 10;

/// CMake invocation builder
#[derive(Debug, Clone)]
pub struct CMakeConfig {
    /// CMake executable (name on PATH or a path)
    cmake: OsString,
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// Generator (e.g., "Ninja Multi-Config")
    generator: String,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(source_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            cmake: OsString::from("cmake"),
            source_dir,
            build_dir,
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }

    /// Set the CMake program
    pub fn program(mut self, cmake: impl Into<OsString>) -> Self {
        self.cmake = cmake.into();
        self
    }

    /// Set the generator
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// `cmake -G <generator> --fresh -S <source> -B <build> [extra...]`
    pub fn configure_command(&self, extra: &[String]) -> CommandLine {
        CommandLine::new(self.cmake.clone())
            .arg("-G")
            .arg(self.generator.as_str())
            .arg("--fresh")
            .arg("-S")
            .arg(self.source_dir.as_os_str())
            .arg("-B")
            .arg(self.build_dir.as_os_str())
            .args(extra)
    }

    /// `cmake --build <build> --target <target> --config <variant> -j <jobs> [extra...]`
    pub fn build_command(
        &self,
        target: &str,
        variant: BuildVariant,
        jobs: usize,
        extra: &[String],
    ) -> CommandLine {
        CommandLine::new(self.cmake.clone())
            .arg("--build")
            .arg(self.build_dir.as_os_str())
            .arg("--target")
            .arg(target)
            .arg("--config")
            .arg(variant.as_str())
            .arg("-j")
            .arg(jobs.to_string())
            .args(extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CMakeConfig {
        CMakeConfig::new(PathBuf::from("."), PathBuf::from("build"))
    }

    #[test]
    fn test_configure_command() {
        let cmd = config().configure_command(&[]);
        assert_eq!(cmd.program, "cmake");
        assert_eq!(
            cmd.args_lossy(),
            ["-G", "Ninja Multi-Config", "--fresh", "-S", ".", "-B", "build"]
        );
    }

    #[test]
    fn test_configure_command_appends_extra() {
        let extra = vec!["-DCMAKE_EXPORT_COMPILE_COMMANDS=ON".to_string()];
        let cmd = config()
            .program("/opt/cmake/bin/cmake")
            .generator("Ninja")
            .configure_command(&extra);
        assert_eq!(cmd.program, "/opt/cmake/bin/cmake");
        assert_eq!(
            cmd.args_lossy(),
            [
                "-G",
                "Ninja",
                "--fresh",
                "-S",
                ".",
                "-B",
                "build",
                "-DCMAKE_EXPORT_COMPILE_COMMANDS=ON"
            ]
        );
    }

    #[test]
    fn test_build_command() {
        let extra = vec!["--foo".to_string(), "bar".to_string()];
        let cmd = config().build_command("demo", BuildVariant::Release, DEFAULT_JOBS, &extra);
        assert_eq!(
            cmd.args_lossy(),
            [
                "--build", "build", "--target", "demo", "--config", "Release", "-j", "10", "--foo",
                "bar"
            ]
        );
    }

    #[test]
    fn test_variant_changes_only_config_flag() {
        let debug = config().build_command("demo", BuildVariant::Debug, 4, &[]);
        let release = config().build_command("demo", BuildVariant::Release, 4, &[]);
        let diff: Vec<_> = debug
            .args
            .iter()
            .zip(&release.args)
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].0, "Debug");
    }
}
