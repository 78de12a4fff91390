use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error(transparent)]
    Config(#[from] toolshed_core::errors::ConfigError),

    #[error("Failed to execute command '{command}': {source}")]
    CommandFailed {
        command: String,
        source: std::io::Error,
    },

    /// A silent-mode command exited non-zero. The message is the captured
    /// combined stdout+stderr, verbatim.
    #[error("{output}")]
    CommandFailure { command: String, output: String },
}

pub type Result<T> = std::result::Result<T, ExecError>;
