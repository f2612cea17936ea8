//! Runner module for node-run-script.
//!
//! Handles script execution with the selected package manager.

mod executable;
mod executor;

pub use executable::{Executable, Execution, ExecutionError, ProcessExecutable};
pub use executor::{format_duration, RunReport, ScriptOutcome, ScriptRunner};
