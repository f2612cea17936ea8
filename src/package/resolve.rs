//! Resolving a requested script list against the manifest.

use std::path::Path;

use crate::error::{Result, RunScriptError};

use super::manager::{select_package_manager, PackageManager};
use super::types::Manifest;

/// Validated scripts to run, in request order, and the manager to run them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPlan {
    scripts: Vec<String>,
    manager: PackageManager,
}

impl ScriptPlan {
    /// Create a plan without validation.
    pub fn new(scripts: Vec<String>, manager: PackageManager) -> Self {
        Self { scripts, manager }
    }

    /// Script names in execution order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// The package manager that runs every script of this plan.
    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Get the number of scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if the plan has no scripts.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

/// Split a comma-separated script list, trimming each name.
///
/// # Examples
///
/// ```
/// use node_run_script::package::split_script_list;
///
/// assert_eq!(split_script_list("build, some-script "), vec!["build", "some-script"]);
/// ```
pub fn split_script_list(requested: &str) -> Vec<String> {
    requested
        .split(',')
        .map(|name| name.trim().to_string())
        .collect()
}

/// Resolve the requested scripts against the manifest.
///
/// Every name absent from the manifest is reported, not just the first.
/// Duplicates are kept and run once per occurrence.
///
/// # Errors
///
/// Returns `MissingScripts` if any requested script is not declared.
pub fn resolve(requested: &str, manifest: &Manifest, project_dir: &Path) -> Result<ScriptPlan> {
    let scripts = split_script_list(requested);

    let missing: Vec<String> = scripts
        .iter()
        .filter(|name| !manifest.contains(name))
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(RunScriptError::MissingScripts { names: missing });
    }

    let manager = select_package_manager(project_dir);
    tracing::debug!(?scripts, %manager, "resolved scripts");

    Ok(ScriptPlan::new(scripts, manager))
}
