//! CLI integration tests for node-run-script.
//!
//! These tests verify the binary's behaviour using assert_cmd. Scripts are
//! never handed to a real npm: `--npm` points at a stand-in program.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{
    create_nested_project, create_project, create_project_invalid_json, create_yarn_project,
    standard_scripts,
};

/// Get a Command for the binary with a clean configuration environment.
fn node_run_script() -> Command {
    let mut cmd = cargo_bin_cmd!("node-run-script");
    cmd.env_remove("BP_NODE_RUN_SCRIPTS")
        .env_remove("BP_NODE_PROJECT_PATH")
        .env_remove("LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    node_run_script()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("--working-dir"));
}

#[test]
fn test_version_output() {
    node_run_script()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_phase_is_required() {
    node_run_script().assert().failure();
}

// ==================== Detect ====================

#[test]
fn test_detect_prints_npm_plan() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("detect")
        .arg("--working-dir")
        .arg(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build,test")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "node""#))
        .stdout(predicate::str::contains(r#""name": "npm""#));
}

#[test]
fn test_detect_prints_yarn_plan() {
    let project = create_yarn_project(&standard_scripts());

    node_run_script()
        .arg("detect")
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "yarn""#))
        .stdout(predicate::str::contains(r#""name": "npm""#).not());
}

#[test]
fn test_detect_honours_project_path() {
    let working_dir = create_nested_project("app", &standard_scripts());

    node_run_script()
        .arg("detect")
        .current_dir(working_dir.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .env("BP_NODE_PROJECT_PATH", "app")
        .assert()
        .success();
}

#[test]
fn test_detect_fails_without_script_list() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("detect")
        .current_dir(project.path())
        .assert()
        .code(100)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("BP_NODE_RUN_SCRIPTS"));
}

#[test]
fn test_detect_fails_for_unknown_script() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("detect")
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build,deploy")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "could not find script(s) 'deploy' in package.json",
        ));
}

#[test]
fn test_detect_fails_without_package_json() {
    let dir = tempfile::TempDir::new().unwrap();

    node_run_script()
        .arg("detect")
        .current_dir(dir.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .code(100)
        .stderr(predicate::str::contains("package.json does not exist"));
}

#[test]
fn test_detect_with_malformed_manifest_is_an_error() {
    let project = create_project_invalid_json();

    node_run_script()
        .arg("detect")
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse package.json"));
}

#[test]
fn test_detect_fails_for_missing_project_path() {
    let dir = tempfile::TempDir::new().unwrap();

    node_run_script()
        .arg("detect")
        .current_dir(dir.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .env("BP_NODE_PROJECT_PATH", "app")
        .assert()
        .code(100);
}

// ==================== Build ====================

#[cfg(unix)]
#[test]
fn test_build_runs_scripts() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("build")
        .args(["--npm", "true"])
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build,some-script")
        .assert()
        .success()
        .stderr(predicate::str::contains("Running 'npm run build'"))
        .stderr(predicate::str::contains("Running 'npm run some-script'"))
        .stderr(predicate::str::contains("Completed in"));
}

#[cfg(unix)]
#[test]
fn test_build_uses_yarn_with_lockfile() {
    let project = create_yarn_project(&standard_scripts());

    node_run_script()
        .arg("build")
        .args(["--npm", "false", "--yarn", "true"])
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .success()
        .stderr(predicate::str::contains("Running 'yarn run build'"));
}

#[cfg(unix)]
#[test]
fn test_build_fails_fast_with_output() {
    let project = create_project(&standard_scripts());
    // `sh run <script>` executes this file from the project dir.
    fs::write(
        project.path().join("run"),
        "echo \"output from $1\"\necho \"broken $1\" >&2\nexit 3\n",
    )
    .unwrap();

    node_run_script()
        .arg("build")
        .args(["--npm", "sh"])
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build,test")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("output from build"))
        .stderr(predicate::str::contains("broken build"))
        .stderr(predicate::str::contains("Script 'build' failed: exited with code 3"))
        .stderr(predicate::str::contains("Running 'npm run test'").not());
}

#[cfg(unix)]
#[test]
fn test_build_hides_output_of_passing_scripts() {
    let project = create_project(&standard_scripts());
    fs::write(project.path().join("run"), "echo \"output from $1\"\n").unwrap();

    node_run_script()
        .arg("build")
        .args(["--npm", "sh"])
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .success()
        .stdout(predicate::str::contains("output from build").not())
        .stderr(predicate::str::contains("output from build").not());
}

#[test]
fn test_build_missing_script_runs_nothing() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("build")
        .args(["--npm", "node-run-script-no-such-npm"])
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build,missing")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'missing'"))
        .stderr(predicate::str::contains("Running").not());
}

#[test]
fn test_build_without_script_list() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("build")
        .current_dir(project.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("BP_NODE_RUN_SCRIPTS"));
}

#[test]
fn test_build_with_malformed_manifest() {
    let project = create_project_invalid_json();

    node_run_script()
        .arg("build")
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_build_spawn_failure() {
    let project = create_project(&standard_scripts());

    node_run_script()
        .arg("build")
        .args(["--npm", "node-run-script-no-such-npm"])
        .current_dir(project.path())
        .env("BP_NODE_RUN_SCRIPTS", "build")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("node-run-script-no-such-npm"));
}
