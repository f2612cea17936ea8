//! CLI argument definitions for node-run-script.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use node_run_script::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Working dir: {:?}", cli.working_dir());
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Run selected package.json scripts as a buildpack step.
#[derive(Parser, Debug)]
#[command(name = "node-run-script")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub phase: Phase,

    /// Application source directory (default: current directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub working_dir: Option<PathBuf>,

    /// npm binary used to run scripts
    #[arg(long, value_name = "PATH", default_value = "npm", global = true)]
    pub npm: PathBuf,

    /// yarn binary used to run scripts
    #[arg(long, value_name = "PATH", default_value = "yarn", global = true)]
    pub yarn: PathBuf,

    /// Verb passed to npm before the script name
    #[arg(long, value_name = "VERB", default_value = "run", global = true)]
    pub npm_verb: String,
}

/// Lifecycle phase to execute.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Check that the requested scripts exist and print the build plan
    Detect,
    /// Run the requested scripts
    Build,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the working directory.
    ///
    /// Returns the provided path or the current directory.
    pub fn working_dir(&self) -> PathBuf {
        self.working_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
