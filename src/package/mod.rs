//! Package module for node-run-script.
//!
//! Handles package.json parsing, package manager selection, and resolving
//! the requested scripts.

mod manager;
pub mod manifest;
mod resolve;
mod types;

pub use manager::{select_package_manager, PackageManager};
pub use manifest::{parse_manifest, read_manifest, MANIFEST_FILE};
pub use resolve::{resolve, split_script_list, ScriptPlan};
pub use types::{Manifest, PackageJson};
