//! Configuration module for node-run-script.
//!
//! Builds an immutable [`Environment`] from process environment variables:
//! - `BP_NODE_RUN_SCRIPTS` - comma-separated scripts to run (required)
//! - `BP_NODE_PROJECT_PATH` - project path relative to the working directory
//! - `LOG_LEVEL` - log verbosity

mod env;
mod types;

pub use env::{LOG_LEVEL, PROJECT_PATH, RUN_SCRIPTS};
pub use types::{Environment, LogLevel};
