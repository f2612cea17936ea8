//! Script execution.
//!
//! Runs a resolved [`ScriptPlan`] one script at a time, stopping at the first
//! failure. Each script's output is captured and only logged when it fails.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::{Result, RunScriptError};
use crate::package::{PackageManager, ScriptPlan};

use super::executable::{Executable, Execution};

/// Outcome of one script that ran successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Script name.
    pub name: String,
    /// The invocation, formatted for display.
    pub command: String,
    /// Wall-clock time of the invocation.
    pub duration: Duration,
}

/// Result of a plan in which every script succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Package manager that ran the scripts.
    pub manager: PackageManager,
    /// One entry per executed script, in order.
    pub scripts: Vec<ScriptOutcome>,
    /// Wall-clock time of the whole plan.
    pub duration: Duration,
}

/// Sequential script runner with one executable per package manager.
pub struct ScriptRunner<N, Y> {
    npm: N,
    yarn: Y,
    npm_verb: String,
    yarn_verb: String,
}

impl<N: Executable, Y: Executable> ScriptRunner<N, Y> {
    /// Create a runner using the default `run` verb for both managers.
    pub fn new(npm: N, yarn: Y) -> Self {
        Self {
            npm,
            yarn,
            npm_verb: PackageManager::Npm.default_run_verb().to_string(),
            yarn_verb: PackageManager::Yarn.default_run_verb().to_string(),
        }
    }

    /// Override the verb passed before the script name for one manager.
    ///
    /// npm accepts both `run` and `run-script`.
    pub fn with_verb(mut self, manager: PackageManager, verb: impl Into<String>) -> Self {
        match manager {
            PackageManager::Npm => self.npm_verb = verb.into(),
            PackageManager::Yarn => self.yarn_verb = verb.into(),
        }
        self
    }

    /// Get the verb configured for a manager.
    pub fn verb(&self, manager: PackageManager) -> &str {
        match manager {
            PackageManager::Npm => &self.npm_verb,
            PackageManager::Yarn => &self.yarn_verb,
        }
    }

    fn executable(&self, manager: PackageManager) -> &dyn Executable {
        match manager {
            PackageManager::Npm => &self.npm,
            PackageManager::Yarn => &self.yarn,
        }
    }

    /// Run every script of the plan in order inside `project_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ScriptFailed` for the first script that exits non-zero or
    /// cannot be started. Scripts after it are not run; the error carries
    /// the failing script's output and the scripts that completed before it.
    pub fn run(&self, plan: &ScriptPlan, project_dir: &Path) -> Result<RunReport> {
        let manager = plan.manager();
        let verb = self.verb(manager);
        let executable = self.executable(manager);

        let started = Instant::now();
        let mut buffer = Vec::new();
        let mut outcomes: Vec<ScriptOutcome> = Vec::with_capacity(plan.len());

        for script in plan.scripts() {
            let command = manager.format_command(verb, script);
            tracing::info!("Running '{command}'");

            let args = manager.run_args(verb, script);
            let script_started = Instant::now();
            let result = executable.execute(Execution {
                dir: project_dir,
                args: &args,
                output: &mut buffer,
            });

            if let Err(source) = result {
                let output = String::from_utf8_lossy(&buffer).into_owned();
                if let Some(text) = failure_log(&output) {
                    tracing::error!("{text}");
                }
                return Err(RunScriptError::ScriptFailed {
                    script: script.clone(),
                    command,
                    completed: outcomes.into_iter().map(|o| o.name).collect(),
                    output,
                    source,
                });
            }

            let duration = script_started.elapsed();
            tracing::debug!(script = %script, ?duration, "script finished");
            outcomes.push(ScriptOutcome {
                name: script.clone(),
                command,
                duration,
            });
            buffer.clear();
        }

        let duration = started.elapsed();
        tracing::info!("Completed in {}", format_duration(duration));

        Ok(RunReport {
            manager,
            scripts: outcomes,
            duration,
        })
    }
}

/// Text logged for a failed script's output, or `None` when it printed nothing.
fn failure_log(output: &str) -> Option<&str> {
    let text = output.trim_end();
    (!text.trim_start().is_empty()).then_some(text)
}

/// Format a duration rounded to the millisecond, e.g. `1.234s` or `12ms`.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else {
        format!("{}.{:03}s", millis / 1000, millis % 1000)
    }
}
