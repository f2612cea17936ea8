//! Utility module for node-run-script.
//!
//! Path helpers shared by the detect and build phases.

mod paths;

pub use paths::find_project_dir;
