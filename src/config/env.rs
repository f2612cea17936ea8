//! Loading configuration from environment variables.

use std::path::PathBuf;

use super::types::{Environment, LogLevel};

/// Comma-separated scripts to run.
pub const RUN_SCRIPTS: &str = "BP_NODE_RUN_SCRIPTS";
/// Project directory relative to the working directory.
pub const PROJECT_PATH: &str = "BP_NODE_PROJECT_PATH";
/// Log verbosity.
pub const LOG_LEVEL: &str = "LOG_LEVEL";

impl Environment {
    /// Load from the process environment. Variables that are not valid
    /// UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Load from `(name, value)` pairs. Unrelated names are ignored and an
    /// unknown log level keeps the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_run_script::config::{Environment, LogLevel};
    ///
    /// let env = Environment::from_vars([
    ///     ("BP_NODE_RUN_SCRIPTS", "build,test"),
    ///     ("LOG_LEVEL", "DEBUG"),
    /// ]);
    /// assert_eq!(env.run_scripts().unwrap(), "build,test");
    /// assert_eq!(env.log_level, LogLevel::Debug);
    /// ```
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut env = Environment::default();

        for (key, value) in vars {
            match key.as_ref() {
                RUN_SCRIPTS => env.run_scripts = Some(value.into()),
                PROJECT_PATH => env.project_path = PathBuf::from(value.into()),
                LOG_LEVEL => {
                    let value = value.into();
                    match LogLevel::parse(&value) {
                        Some(level) => env.log_level = level,
                        None => eprintln!(
                            "Warning: Unknown {LOG_LEVEL} '{value}', using {}",
                            env.log_level
                        ),
                    }
                }
                _ => {}
            }
        }

        env
    }
}
