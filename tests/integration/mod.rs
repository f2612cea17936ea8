//! Integration tests for node-run-script.
//!
//! This module contains integration tests organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary projects
//! - `cli_tests` - Binary behaviour for the detect and build phases
//! - `detection_tests` - Package manager selection and detect phase
//! - `build_tests` - Build phase with recording executables
//! - `snapshot_tests` - Build plan output snapshots using insta

pub mod cli_tests;
pub mod detection_tests;
