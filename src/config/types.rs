//! Configuration type definitions.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, RunScriptError};

use super::env::RUN_SCRIPTS;

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    ///
    /// Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        };
        f.write_str(name)
    }
}

/// Settings of one build step invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Raw comma-separated script list, if set.
    pub run_scripts: Option<String>,
    /// Project directory relative to the working directory.
    pub project_path: PathBuf,
    /// Log verbosity.
    pub log_level: LogLevel,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            run_scripts: None,
            project_path: PathBuf::from("."),
            log_level: LogLevel::default(),
        }
    }
}

impl Environment {
    /// Create an environment with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested script list.
    pub fn with_run_scripts(mut self, scripts: impl Into<String>) -> Self {
        self.run_scripts = Some(scripts.into());
        self
    }

    /// Set the project path.
    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = path.into();
        self
    }

    /// The requested script list.
    ///
    /// # Errors
    ///
    /// Returns `MissingScriptList` when the list is unset or blank. A blank
    /// value disables the step rather than running nothing.
    pub fn run_scripts(&self) -> Result<&str> {
        match self.run_scripts.as_deref() {
            Some(scripts) if !scripts.trim().is_empty() => Ok(scripts),
            _ => Err(RunScriptError::MissingScriptList { var: RUN_SCRIPTS }),
        }
    }

    /// Project directory inside `working_dir`.
    pub fn project_dir(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.project_path)
    }
}
