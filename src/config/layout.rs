//! Resolution of source, build and executable locations

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::build::cmake::{CMakeConfig, DEFAULT_GENERATOR};
use crate::build::BuildVariant;
use crate::utils::paths;

/// User overrides for the project layout
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub executable: Option<String>,
    pub cmake: String,
    pub generator: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from("build"),
            executable: None,
            cmake: "cmake".to_string(),
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }
}

/// Fully resolved layout of the project being driven
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Directory handed to `cmake -S`, as given by the user
    pub source_dir: PathBuf,
    /// Directory handed to `cmake -B`, as given by the user
    pub build_dir: PathBuf,
    /// Build target, also the file name of the built executable
    pub executable: String,
    pub cmake: String,
    pub generator: String,
}

impl ProjectLayout {
    /// Resolve a layout relative to `cwd`
    ///
    /// Without `--executable`, the executable is named after the source
    /// directory, which is the current directory by default.
    pub fn resolve(options: LayoutOptions, cwd: &Path) -> Result<Self> {
        let executable = match options.executable {
            Some(name) => name,
            None => paths::project_name(&paths::absolutize(&options.source_dir, cwd))?,
        };

        Ok(Self {
            source_dir: options.source_dir,
            build_dir: options.build_dir,
            executable,
            cmake: options.cmake,
            generator: options.generator,
        })
    }

    /// CMake invocation builder for this layout
    pub fn cmake(&self) -> CMakeConfig {
        CMakeConfig::new(self.source_dir.clone(), self.build_dir.clone())
            .program(self.cmake.as_str())
            .generator(self.generator.as_str())
    }

    /// Expected location of the built executable for `variant`
    pub fn executable_path(&self, variant: BuildVariant) -> PathBuf {
        paths::executable_path(&self.build_dir, variant, &self.executable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_executable_is_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("my_app");
        fs::create_dir_all(&project).unwrap();

        let layout = ProjectLayout::resolve(LayoutOptions::default(), &project).unwrap();
        assert_eq!(layout.executable, "my_app");
        assert_eq!(layout.source_dir, PathBuf::from("."));
        assert_eq!(layout.build_dir, PathBuf::from("build"));
        assert_eq!(layout.cmake, "cmake");
        assert_eq!(layout.generator, "Ninja Multi-Config");
    }

    #[test]
    fn test_executable_follows_source_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("engine")).unwrap();

        let options = LayoutOptions {
            source_dir: PathBuf::from("engine"),
            ..Default::default()
        };
        let layout = ProjectLayout::resolve(options, temp_dir.path()).unwrap();
        assert_eq!(layout.executable, "engine");
    }

    #[test]
    fn test_explicit_executable_wins() {
        let temp_dir = TempDir::new().unwrap();
        let options = LayoutOptions {
            executable: Some("tool".to_string()),
            build_dir: PathBuf::from("out"),
            ..Default::default()
        };
        let layout = ProjectLayout::resolve(options, temp_dir.path()).unwrap();
        assert_eq!(layout.executable, "tool");
        assert_eq!(
            layout.executable_path(BuildVariant::Release),
            PathBuf::from("out")
                .join("Release")
                .join(format!("tool{}", std::env::consts::EXE_SUFFIX))
        );
    }
}
