use crate::error::{Result, ToolError};
use crate::strategy::{cargo_install_args, import_binary_name, InstallStrategy};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use toolshed_core::config::ShellContext;
use toolshed_core::logging::{format_command_for_display, log_command};

/// A named tool binding. The location is computed on first resolve and
/// memoized for the life of the process.
#[derive(Debug)]
pub struct Tool {
    name: String,
    strategy: InstallStrategy,
    location: OnceCell<PathBuf>,
}

impl Tool {
    pub fn new(name: impl Into<String>, strategy: InstallStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
            location: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> &InstallStrategy {
        &self.strategy
    }

    /// Ensure the tool exists, installing it on first use, and return its
    /// location. Source-built tools resolve to `<out_dir>/bin/<name>`;
    /// package-manager tools resolve to their bare name, discoverable on
    /// `PATH`.
    pub fn resolve(&self, ctx: &ShellContext) -> Result<&Path> {
        self.location
            .get_or_try_init(|| self.provision(ctx))
            .map(PathBuf::as_path)
    }

    fn provision(&self, ctx: &ShellContext) -> Result<PathBuf> {
        match &self.strategy {
            InstallStrategy::Source { import_path } => self.build_from_source(ctx, import_path),
            InstallStrategy::PackageManager { formula } => {
                self.install_via_package_manager(ctx, formula)
            }
        }
    }

    fn build_from_source(&self, ctx: &ShellContext, import_path: &str) -> Result<PathBuf> {
        let target = ctx.bin_dir().join(import_binary_name(import_path));
        if target.exists() {
            return Ok(target);
        }

        tracing::info!("Building tool '{}' from '{}'", self.name, import_path);
        let mut command = Command::new(&ctx.cargo);
        command.args(cargo_install_args(import_path, &ctx.out_dir));
        self.run_installer(ctx, &mut command)?;
        Ok(target)
    }

    fn install_via_package_manager(&self, ctx: &ShellContext, formula: &str) -> Result<PathBuf> {
        if which::which(&self.name).is_ok() {
            return Ok(PathBuf::from(&self.name));
        }

        tracing::info!(
            "Installing tool '{}' via package manager formula '{}'",
            self.name,
            formula
        );
        let mut command = Command::new(&ctx.brew);
        command.args(["install", formula]);
        self.run_installer(ctx, &mut command)?;
        Ok(PathBuf::from(&self.name))
    }

    fn run_installer(&self, ctx: &ShellContext, command: &mut Command) -> Result<()> {
        log_command(ctx.verbose, command);
        let status = command.status().map_err(|e| ToolError::InstallerSpawn {
            tool: self.name.clone(),
            source: e,
        })?;

        if !status.success() {
            return Err(ToolError::InstallFailed {
                tool: self.name.clone(),
                command: format_command_for_display(command),
                status,
            });
        }
        Ok(())
    }
}
