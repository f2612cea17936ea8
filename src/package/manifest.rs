//! Reading the script manifest from package.json.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, RunScriptError};

use super::types::{Manifest, PackageJson};

/// Name of the manifest file at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Read the script manifest of a project.
///
/// # Arguments
///
/// * `project_dir` - The directory containing package.json
///
/// # Errors
///
/// Returns an error if:
/// - package.json does not exist (`ManifestNotFound`)
/// - the file cannot be read (`IoWithContext`)
/// - the JSON is malformed or has the wrong shape (`ManifestMalformed`)
pub fn read_manifest(project_dir: &Path) -> Result<Manifest> {
    let path = project_dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RunScriptError::ManifestNotFound {
            path: project_dir.to_path_buf(),
        },
        _ => RunScriptError::io("read", &path, e),
    })?;

    let manifest = parse_manifest(&content).map_err(|message| {
        RunScriptError::ManifestMalformed {
            path: path.clone(),
            message,
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        package = manifest.name().unwrap_or("unnamed"),
        scripts = manifest.len(),
        "read manifest"
    );

    Ok(manifest)
}

/// Parse package.json content into a manifest.
///
/// The error string carries the parser message with the offending line.
///
/// # Examples
///
/// ```
/// use node_run_script::package::parse_manifest;
///
/// let manifest = parse_manifest(r#"{"scripts": {"build": "tsc"}}"#).unwrap();
/// assert_eq!(manifest.command("build"), Some("tsc"));
/// ```
pub fn parse_manifest(content: &str) -> std::result::Result<Manifest, String> {
    serde_json::from_str::<PackageJson>(content)
        .map(Manifest::from)
        .map_err(|e| format_json_error(content, &e))
}

/// Format a JSON parsing error with context.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}
