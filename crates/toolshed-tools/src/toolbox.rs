use crate::error::{Result, ToolError};
use crate::strategy::InstallStrategy;
use crate::tool::Tool;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use toolshed_core::config::ShellContext;
use toolshed_core::errors::ConfigError;

/// Explicit registry of tool bindings, looked up by logical name.
#[derive(Debug, Default)]
pub struct Toolbox {
    tools: BTreeMap<String, Tool>,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    tools: BTreeMap<String, ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    source: Option<String>,
    formula: Option<String>,
}

impl Toolbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding under a logical name. Rebinding a name replaces
    /// the previous binding.
    pub fn bind(&mut self, name: impl Into<String>, strategy: InstallStrategy) {
        let name = name.into();
        self.tools.insert(name.clone(), Tool::new(name, strategy));
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Resolve a bound tool, installing it on first use.
    pub fn resolve(&self, name: &str, ctx: &ShellContext) -> Result<&Path> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotBound(name.to_string()))?;
        tool.resolve(ctx)
    }

    /// Load bindings from a TOML manifest:
    ///
    /// ```toml
    /// [tools.migrate]
    /// source = "https://github.com/johngibb/migrate"
    ///
    /// [tools.modd]
    /// formula = "modd"
    /// ```
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).map_err(ConfigError::Io)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let manifest: ManifestFile = toml::from_str(content).map_err(ConfigError::Toml)?;

        let mut toolbox = Self::new();
        for (name, entry) in manifest.tools {
            let strategy = match (entry.source, entry.formula) {
                (Some(import_path), None) => InstallStrategy::Source { import_path },
                (None, Some(formula)) => InstallStrategy::PackageManager { formula },
                _ => return Err(ConfigError::InvalidManifestEntry { name }.into()),
            };
            toolbox.bind(name, strategy);
        }
        Ok(toolbox)
    }
}
