//! Path utilities for cmrun

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::build::BuildVariant;

/// Ensure a directory exists
///
/// Creating a directory that is already there is not an error.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Make `path` absolute against `cwd`, resolving symlinks when it exists
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

/// Base name of a project directory, used as the default executable name
pub fn project_name(project_dir: &Path) -> Result<String> {
    let name = project_dir
        .file_name()
        .with_context(|| {
            format!(
                "Cannot derive an executable name from {}, pass --executable",
                project_dir.display()
            )
        })?
        .to_string_lossy()
        .to_string();
    Ok(name)
}

/// Location of a built executable: `<build-dir>/<variant>/<name>`
///
/// The platform executable suffix is appended, which is empty on Unix.
pub fn executable_path(build_dir: &Path, variant: BuildVariant, name: &str) -> PathBuf {
    build_dir
        .join(variant.as_str())
        .join(format!("{}{}", name, std::env::consts::EXE_SUFFIX))
}
