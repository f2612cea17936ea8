//! Build phase.

use std::path::Path;

use crate::config::Environment;
use crate::error::Result;
use crate::package::{read_manifest, resolve};
use crate::runner::{Executable, RunReport, ScriptRunner};
use crate::utils::find_project_dir;

/// Name and version shown in the build log title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildpackInfo {
    pub name: String,
    pub version: String,
}

impl Default for BuildpackInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Resolve the requested scripts in `working_dir` and run them.
///
/// # Errors
///
/// Returns the first configuration, lookup, parse, validation, or execution
/// error. Nothing runs unless every requested script is declared.
pub fn build<N, Y>(
    info: &BuildpackInfo,
    env: &Environment,
    working_dir: &Path,
    runner: &ScriptRunner<N, Y>,
) -> Result<RunReport>
where
    N: Executable,
    Y: Executable,
{
    tracing::info!("{} {}", info.name, info.version);

    let requested = env.run_scripts()?;
    let project_dir = find_project_dir(env, working_dir)?;
    let manifest = read_manifest(&project_dir)?;
    let plan = resolve(requested, &manifest, &project_dir)?;
    for script in plan.scripts() {
        tracing::debug!(
            script = %script,
            command = manifest.command(script).unwrap_or_default(),
            "queued"
        );
    }

    tracing::info!("Executing build process");
    runner.run(&plan, &project_dir)
}
