//! Type definitions for package.json parsing.

use std::collections::HashMap;

use serde::Deserialize;

/// The subset of package.json this crate reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    /// Package name.
    #[serde(default)]
    pub name: Option<String>,

    /// Raw scripts object. `null` and a missing field both mean no scripts.
    #[serde(default)]
    pub scripts: Option<HashMap<String, String>>,
}

/// Script declarations of a project: script name to shell command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    name: Option<String>,
    scripts: HashMap<String, String>,
}

impl Manifest {
    /// Create a manifest from a script mapping.
    pub fn new(scripts: HashMap<String, String>) -> Self {
        Self {
            name: None,
            scripts,
        }
    }

    /// Build a manifest from `(name, command)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_run_script::package::Manifest;
    ///
    /// let manifest = Manifest::from_pairs([("build", "tsc"), ("test", "jest")]);
    /// assert!(manifest.contains("build"));
    /// assert_eq!(manifest.command("test"), Some("jest"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Package name, if package.json declares one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check whether a script is declared.
    pub fn contains(&self, script: &str) -> bool {
        self.scripts.contains_key(script)
    }

    /// Get the shell command of a script.
    pub fn command(&self, script: &str) -> Option<&str> {
        self.scripts.get(script).map(String::as_str)
    }

    /// Get the number of scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if no scripts are declared.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl From<PackageJson> for Manifest {
    fn from(package: PackageJson) -> Self {
        Self {
            name: package.name,
            scripts: package.scripts.unwrap_or_default(),
        }
    }
}
