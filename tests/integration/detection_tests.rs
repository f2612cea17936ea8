//! Integration tests for package manager selection and the detect phase.

use std::fs;

use node_run_script::buildpack::{detect, BuildPlan, Requirement};
use node_run_script::config::Environment;
use node_run_script::error::RunScriptError;
use node_run_script::package::{read_manifest, resolve, select_package_manager, PackageManager};

use crate::integration::fixtures::{
    create_nested_project, create_project, create_yarn_project, standard_scripts,
};

// ==================== Lock File Selection ====================

#[test]
fn test_select_npm_without_lockfile() {
    let project = create_project(&standard_scripts());
    assert_eq!(select_package_manager(project.path()), PackageManager::Npm);
}

#[test]
fn test_select_yarn_with_lockfile() {
    let project = create_yarn_project(&standard_scripts());
    assert_eq!(select_package_manager(project.path()), PackageManager::Yarn);
}

#[test]
fn test_select_yarn_with_empty_lockfile() {
    let project = create_project(&standard_scripts());
    fs::write(project.path().join("yarn.lock"), "").unwrap();
    assert_eq!(select_package_manager(project.path()), PackageManager::Yarn);
}

#[test]
fn test_select_only_looks_at_project_root() {
    let working_dir = create_nested_project("app", &standard_scripts());
    fs::write(working_dir.path().join("yarn.lock"), "").unwrap();

    assert_eq!(
        select_package_manager(&working_dir.path().join("app")),
        PackageManager::Npm
    );
}

// ==================== Resolution ====================

#[test]
fn test_resolve_from_disk() {
    let project = create_yarn_project(&standard_scripts());
    let manifest = read_manifest(project.path()).unwrap();

    let plan = resolve("test, build", &manifest, project.path()).unwrap();
    assert_eq!(plan.scripts(), ["test", "build"]);
    assert_eq!(plan.manager(), PackageManager::Yarn);
}

// ==================== Detect Phase ====================

#[test]
fn test_detect_plan_requires_node_and_npm() {
    let project = create_project(&standard_scripts());
    let env = Environment::new().with_run_scripts("build");

    let plan = detect(&env, project.path()).unwrap();
    assert_eq!(
        plan.requires,
        vec![Requirement::new("node"), Requirement::new("npm")]
    );
}

#[test]
fn test_detect_plan_requires_node_and_yarn() {
    let project = create_yarn_project(&standard_scripts());
    let env = Environment::new().with_run_scripts("build,test");

    let plan = detect(&env, project.path()).unwrap();
    assert_eq!(plan, BuildPlan::for_manager(PackageManager::Yarn));
}

#[test]
fn test_detect_from_env_vars() {
    let working_dir = create_nested_project("nested_yarn_app", &standard_scripts());
    fs::write(working_dir.path().join("nested_yarn_app/yarn.lock"), "").unwrap();

    let env = Environment::from_vars([
        ("BP_NODE_RUN_SCRIPTS", "build,some-script"),
        ("BP_NODE_PROJECT_PATH", "nested_yarn_app"),
    ]);

    let plan = detect(&env, working_dir.path()).unwrap();
    assert_eq!(plan, BuildPlan::for_manager(PackageManager::Yarn));
}

#[test]
fn test_detect_fails_when_env_not_set() {
    let project = create_project(&standard_scripts());
    let err = detect(&Environment::from_vars([("LOG_LEVEL", "INFO")]), project.path()).unwrap_err();

    assert_eq!(
        err.to_string().lines().next(),
        Some("environment variable $BP_NODE_RUN_SCRIPTS is not set")
    );
}

#[test]
fn test_detect_fails_without_package_json() {
    let project = create_project(&standard_scripts());
    fs::remove_file(project.path().join("package.json")).unwrap();
    let env = Environment::new().with_run_scripts("build");

    let err = detect(&env, project.path()).unwrap_err();
    assert!(matches!(err, RunScriptError::ManifestNotFound { .. }));
    assert!(err.to_string().contains("file package.json does not exist"));
}

#[test]
fn test_detect_fails_for_unknown_scripts() {
    let project = create_project(&[("random-script", "mybuildcommand --args")]);
    let env = Environment::new().with_run_scripts("build");

    let err = detect(&env, project.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not find script(s) 'build' in package.json"
    );
}
