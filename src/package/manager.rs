//! Package manager selection and command building.
//!
//! A project is run with yarn when `yarn.lock` sits at its root, and with
//! npm otherwise.

use std::path::Path;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    /// Node Package Manager (npm)
    #[default]
    Npm,
    /// Yarn package manager
    Yarn,
}

impl PackageManager {
    /// Get the executable name for this package manager.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Verb used to run a package.json script when none is configured.
    ///
    /// Both managers accept `run`; npm also accepts its older alias
    /// `run-script`.
    pub fn default_run_verb(&self) -> &'static str {
        "run"
    }

    /// Get the arguments that run a script with the given verb.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_run_script::package::PackageManager;
    ///
    /// let args = PackageManager::Npm.run_args("run-script", "build");
    /// assert_eq!(args, vec!["run-script", "build"]);
    /// ```
    pub fn run_args(&self, verb: &str, script: &str) -> Vec<String> {
        vec![verb.into(), script.into()]
    }

    /// Format the full invocation as a shell-quoted string for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_run_script::package::PackageManager;
    ///
    /// assert_eq!(PackageManager::Yarn.format_command("run", "build"), "yarn run build");
    /// assert_eq!(
    ///     PackageManager::Npm.format_command("run", "build app"),
    ///     "npm run 'build app'"
    /// );
    /// ```
    pub fn format_command(&self, verb: &str, script: &str) -> String {
        let mut parts = vec![self.executable().to_string()];
        parts.extend(self.run_args(verb, script));
        shell_words::join(parts)
    }

    /// Get the lock file name for this package manager.
    pub fn lock_file(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable())
    }
}

/// Select the package manager for a project.
///
/// Returns yarn if `yarn.lock` exists in `project_dir`, npm otherwise.
/// A failed probe (permissions, broken symlink) counts as "no lock file", so
/// the build falls back to npm instead of failing.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use node_run_script::package::select_package_manager;
///
/// let manager = select_package_manager(Path::new("/workspace"));
/// println!("Using: {}", manager);
/// ```
pub fn select_package_manager(project_dir: &Path) -> PackageManager {
    let yarn_lock = project_dir.join(PackageManager::Yarn.lock_file());
    match std::fs::metadata(&yarn_lock) {
        Ok(_) => PackageManager::Yarn,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(
                    path = %yarn_lock.display(),
                    error = %e,
                    "could not probe lock file, falling back to npm"
                );
            }
            PackageManager::Npm
        }
    }
}
