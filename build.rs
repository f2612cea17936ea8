//! Build script for node-run-script.
//!
//! Generates the man page using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

/// Minimal CLI mirror used for man page generation.
#[derive(Parser)]
#[command(name = "node-run-script")]
#[command(
    author,
    version,
    about = "Run selected package.json scripts as a buildpack step"
)]
#[command(
    long_about = "node-run-script runs the package.json scripts named in \
    BP_NODE_RUN_SCRIPTS, in order, using yarn when yarn.lock is present and npm \
    otherwise.\n\n\
    The detect phase checks that every requested script exists and prints the \
    build plan. The build phase runs the scripts and stops at the first failure, \
    showing that script's output."
)]
struct Cli {
    #[command(subcommand)]
    phase: Phase,

    /// Application source directory (default: current directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    working_dir: Option<PathBuf>,

    /// npm binary used to run scripts
    #[arg(long, value_name = "PATH", default_value = "npm", global = true)]
    npm: PathBuf,

    /// yarn binary used to run scripts
    #[arg(long, value_name = "PATH", default_value = "yarn", global = true)]
    yarn: PathBuf,

    /// Verb passed to npm before the script name
    #[arg(long, value_name = "VERB", default_value = "run", global = true)]
    npm_verb: String,
}

#[derive(Subcommand)]
enum Phase {
    /// Check that the requested scripts exist and print the build plan
    Detect,
    /// Run the requested scripts
    Build,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=NODE_RUN_SCRIPT_GEN_MANPAGE");

    // Only release builds or explicit requests render the man page
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("NODE_RUN_SCRIPT_GEN_MANPAGE").is_err() {
        return;
    }

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    if let Err(err) = man.render(&mut buffer) {
        println!("cargo:warning=failed to render man page: {err}");
        return;
    }

    let man_path = out_dir.join("node-run-script.1");
    if let Err(err) = fs::write(&man_path, buffer) {
        println!("cargo:warning=failed to write {}: {err}", man_path.display());
        return;
    }

    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("node-run-script.1"));
        }
    }
}
