//! Buildpack lifecycle phases.
//!
//! - [`detect`] decides whether the step applies and what it requires
//! - [`build`] resolves the requested scripts and runs them

mod build;
mod detect;

pub use build::{build, BuildpackInfo};
pub use detect::{detect, BuildPlan, Requirement};
