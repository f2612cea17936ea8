//! Path utilities.

use std::path::{Path, PathBuf};

use crate::config::Environment;
use crate::error::{Result, RunScriptError};

/// Locate the project directory configured by `env` inside `working_dir`.
///
/// # Errors
///
/// Returns `ProjectDirNotFound` if the path does not exist or is not a
/// directory.
pub fn find_project_dir(env: &Environment, working_dir: &Path) -> Result<PathBuf> {
    let project_dir = env.project_dir(working_dir);

    if !project_dir.is_dir() {
        return Err(RunScriptError::ProjectDirNotFound { path: project_dir });
    }

    Ok(project_dir)
}
