//! node-run-script
//!
//! A buildpack step that runs a configured list of `package.json` scripts
//! with npm or yarn after dependencies are installed.
//!
//! # Behaviour
//!
//! - **Validated**: every requested script must exist before any of them runs
//! - **Deterministic**: yarn when `yarn.lock` is present, npm otherwise
//! - **Fail-fast**: scripts run one at a time and the first failure stops the step
//! - **Quiet**: script output is only shown when a script fails
//!
//! # Modules
//!
//! - [`buildpack`] - Detect and build phases
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Environment variable configuration
//! - [`error`] - Error types and exit codes
//! - [`logging`] - Tracing subscriber setup
//! - [`package`] - package.json parsing, package manager selection, script resolution
//! - [`runner`] - Script execution
//! - [`utils`] - Path helpers
//!
//! # Example
//!
//! ```no_run
//! use node_run_script::package::{read_manifest, resolve};
//! use node_run_script::runner::{ProcessExecutable, ScriptRunner};
//! use std::path::Path;
//!
//! let project_dir = Path::new("./my-project");
//! let manifest = read_manifest(project_dir).expect("Failed to read package.json");
//! let plan = resolve("build, test", &manifest, project_dir).expect("Unknown script");
//!
//! let runner = ScriptRunner::new(ProcessExecutable::new("npm"), ProcessExecutable::new("yarn"));
//! let report = runner.run(&plan, project_dir).expect("Script failed");
//! println!("Ran {} scripts", report.scripts.len());
//! ```

/// Detect and build phases.
pub mod buildpack;

/// CLI argument definitions.
pub mod cli;

/// Configuration from environment variables.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Logging setup.
pub mod logging;

/// package.json parsing, package manager selection and script resolution.
pub mod package;

/// Script execution.
pub mod runner;

/// Path utilities.
pub mod utils;
