use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Config(#[from] toolshed_core::errors::ConfigError),

    #[error("Tool '{0}' is not bound in this toolbox.")]
    NotBound(String),

    #[error("Failed to install tool '{tool}': '{command}' exited with {status}.")]
    InstallFailed {
        tool: String,
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("Failed to run installer for tool '{tool}': {source}")]
    InstallerSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ToolError>;
