//! Custom error types for node-run-script.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::runner::ExecutionError;

/// Exit codes for node-run-script.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Project directory or package.json missing.
    pub const NO_PACKAGE_JSON: i32 = 2;
    /// Requested scripts are not declared in package.json.
    pub const MISSING_SCRIPTS: i32 = 3;
    /// Script execution failed.
    pub const SCRIPT_FAILED: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
    /// Detection did not pass; the build step should not run.
    pub const DETECT_FAILED: i32 = 100;
}

/// Main error type for node-run-script.
#[derive(Error, Debug)]
pub enum RunScriptError {
    /// The script list is unset or blank.
    #[error("environment variable ${var} is not set\n\nTip: Set it to a comma-separated list of scripts, e.g. {var}=build,test")]
    MissingScriptList { var: &'static str },

    /// The configured project directory does not exist.
    #[error("Project directory {} does not exist", path.display())]
    ProjectDirNotFound { path: PathBuf },

    /// No package.json in the project directory.
    #[error("file package.json does not exist in {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// package.json could not be parsed.
    #[error("Failed to parse package.json at {}:\n  {message}", path.display())]
    ManifestMalformed { path: PathBuf, message: String },

    /// One or more requested scripts are missing from package.json.
    #[error("could not find script(s) {} in package.json", quote_all(names))]
    MissingScripts { names: Vec<String> },

    /// A script exited non-zero or could not be started.
    #[error("Script '{script}' failed: {source}")]
    ScriptFailed {
        script: String,
        command: String,
        /// Scripts that finished successfully before the failure.
        completed: Vec<String>,
        /// Combined stdout and stderr of the failing invocation.
        output: String,
        #[source]
        source: ExecutionError,
    },

    /// IO error with path context.
    #[error("Failed to {operation} '{}': {source}", path.display())]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunScriptError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunScriptError::MissingScriptList { .. } => exit_code::INVALID_CONFIG,
            RunScriptError::ProjectDirNotFound { .. } => exit_code::NO_PACKAGE_JSON,
            RunScriptError::ManifestNotFound { .. } => exit_code::NO_PACKAGE_JSON,
            RunScriptError::ManifestMalformed { .. } => exit_code::NO_PACKAGE_JSON,
            RunScriptError::MissingScripts { .. } => exit_code::MISSING_SCRIPTS,
            RunScriptError::ScriptFailed { .. } => exit_code::SCRIPT_FAILED,
            RunScriptError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
        }
    }

    /// Whether the error means the step does not apply to the project.
    ///
    /// Only a missing script list, project directory or package.json fail
    /// detection; the rest are errors in a project the step applies to.
    pub fn fails_detection(&self) -> bool {
        matches!(
            self,
            RunScriptError::MissingScriptList { .. }
                | RunScriptError::ProjectDirNotFound { .. }
                | RunScriptError::ManifestNotFound { .. }
        )
    }

    /// Build an IO error that remembers what was being done and where.
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunScriptError::IoWithContext {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for node-run-script operations.
pub type Result<T> = std::result::Result<T, RunScriptError>;
