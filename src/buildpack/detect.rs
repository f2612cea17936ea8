//! Detect phase.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Environment;
use crate::error::Result;
use crate::package::{read_manifest, resolve, PackageManager};
use crate::utils::find_project_dir;

/// A dependency the build step needs from earlier buildpacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
}

impl Requirement {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Requirements reported by a passing detect phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub requires: Vec<Requirement>,
}

impl BuildPlan {
    /// Plan requiring node and the given package manager.
    pub fn for_manager(manager: PackageManager) -> Self {
        Self {
            requires: vec![
                Requirement::new("node"),
                Requirement::new(manager.executable()),
            ],
        }
    }
}

/// Check that the step can run in `working_dir`.
///
/// The script list is checked before anything is read from disk.
///
/// # Errors
///
/// Fails when the script list is unset, the project directory or
/// package.json is missing or malformed, or a requested script is not
/// declared.
pub fn detect(env: &Environment, working_dir: &Path) -> Result<BuildPlan> {
    let requested = env.run_scripts()?;
    let project_dir = find_project_dir(env, working_dir)?;
    let manifest = read_manifest(&project_dir)?;
    let plan = resolve(requested, &manifest, &project_dir)?;

    tracing::debug!(manager = %plan.manager(), scripts = plan.len(), "detect passed");

    Ok(BuildPlan::for_manager(plan.manager()))
}
