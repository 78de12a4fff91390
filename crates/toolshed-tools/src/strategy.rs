use std::path::Path;

/// How a bound tool is provisioned when it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStrategy {
    /// Build the tool from a source package with `cargo install`. Import
    /// paths containing `/` are treated as git repository URLs.
    Source { import_path: String },
    /// Install the tool through the system package manager.
    PackageManager { formula: String },
}

impl InstallStrategy {
    pub fn source(import_path: impl Into<String>) -> Self {
        Self::Source {
            import_path: import_path.into(),
        }
    }

    pub fn package_manager(formula: impl Into<String>) -> Self {
        Self::PackageManager {
            formula: formula.into(),
        }
    }
}

/// Final path segment of an import path, used as the artifact name.
pub fn import_binary_name(import_path: &str) -> &str {
    import_path.rsplit('/').next().unwrap_or(import_path)
}

/// Arguments for a `cargo install` that drops binaries under
/// `<out_dir>/bin`.
pub(crate) fn cargo_install_args(import_path: &str, out_dir: &Path) -> Vec<String> {
    let mut args = vec![
        "install".to_string(),
        "--locked".to_string(),
        "--root".to_string(),
        out_dir.display().to_string(),
    ];
    if import_path.contains('/') {
        args.push("--git".to_string());
    }
    args.push(import_path.to_string());
    args
}
