//! node-run-script
//!
//! Entry point for the buildpack step binary.

use std::process::ExitCode;

use anyhow::{Context, Result};

use node_run_script::buildpack::{build, detect, BuildpackInfo};
use node_run_script::cli::{Cli, Phase};
use node_run_script::config::Environment;
use node_run_script::error::{exit_code, RunScriptError};
use node_run_script::logging::init_logging;
use node_run_script::package::PackageManager;
use node_run_script::runner::{ProcessExecutable, ScriptRunner};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let phase = cli.phase;

    match run(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            let code = match err.downcast_ref::<RunScriptError>() {
                Some(run_err) if phase == Phase::Detect && run_err.fails_detection() => {
                    exit_code::DETECT_FAILED
                }
                Some(run_err) => run_err.exit_code(),
                None => exit_code::GENERAL_ERROR,
            };
            eprintln!("Error: {err:#}");
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let env = Environment::from_env();
    init_logging(env.log_level);

    let working_dir = cli.working_dir();
    tracing::debug!(?env, working_dir = %working_dir.display(), "loaded configuration");

    match cli.phase {
        Phase::Detect => {
            let plan = detect(&env, &working_dir)?;
            let json = serde_json::to_string_pretty(&plan).context("Failed to encode build plan")?;
            println!("{json}");
        }
        Phase::Build => {
            let runner = ScriptRunner::new(
                ProcessExecutable::new(&cli.npm),
                ProcessExecutable::new(&cli.yarn),
            )
            .with_verb(PackageManager::Npm, cli.npm_verb.as_str());

            let report = build(&BuildpackInfo::default(), &env, &working_dir, &runner)?;
            tracing::debug!(scripts = report.scripts.len(), "build finished");
        }
    }

    Ok(exit_code::SUCCESS)
}
