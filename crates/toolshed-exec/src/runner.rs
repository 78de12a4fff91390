use crate::envfile::{dotenv_prefix, ensure_local_overrides};
use crate::error::{ExecError, Result};
use crate::shell::wrap_command;
use std::path::Path;
use std::process::{Command, ExitStatus};
use toolshed_core::config::ShellContext;
use toolshed_core::constants::shells;
use toolshed_core::logging::log_shell_command;

/// Options for a single [`run`] invocation. The modes are mutually
/// exclusive; `exec` takes precedence over `silent`.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Environment profile to load `.env` files for. `None` skips env
    /// layering entirely.
    pub env: Option<String>,
    /// Capture merged output, surfacing it only if the command fails.
    pub silent: bool,
    /// Replace the current process with the command.
    pub exec: bool,
}

/// Execute a shell command string.
///
/// The command is wrapped in a `sh -c` indirection so embedded quoting
/// survives verbatim. With an environment profile, the dotenv helper loads
/// the profile's `.env` files first, local overrides winning. In the default
/// mode the child's [`ExitStatus`] is returned whether or not it succeeded;
/// silent mode turns a non-zero exit into [`ExecError::CommandFailure`]
/// carrying the captured output.
pub fn run(ctx: &ShellContext, cmd: &str, opts: &RunOptions) -> Result<ExitStatus> {
    let mut full = wrap_command(cmd);

    if let Some(profile) = opts.env.as_deref() {
        let dir = ctx.work_dir.as_deref().unwrap_or(Path::new("."));
        ensure_local_overrides(dir, profile)?;
        full = format!("{} {}", dotenv_prefix(&ctx.dotenv, profile), full);
    }

    log_shell_command(ctx.verbose, &full);

    if opts.exec {
        exec_command(ctx, &full)
    } else if opts.silent {
        run_silent(ctx, &full)
    } else {
        run_streamed(ctx, &full)
    }
}

fn shell_command(ctx: &ShellContext, command_line: &str) -> Command {
    let mut command = Command::new(shells::SH);
    command.arg("-c").arg(command_line);
    if let Some(dir) = &ctx.work_dir {
        command.current_dir(dir);
    }
    command
}

fn run_streamed(ctx: &ShellContext, full: &str) -> Result<ExitStatus> {
    shell_command(ctx, full)
        .status()
        .map_err(|e| spawn_error(full, e))
}

fn run_silent(ctx: &ShellContext, full: &str) -> Result<ExitStatus> {
    // Merge stderr into stdout at the shell level; the failure message is the
    // combined stream.
    let merged = format!("{} 2>&1", full);
    let output = shell_command(ctx, &merged)
        .output()
        .map_err(|e| spawn_error(full, e))?;

    if !output.status.success() {
        return Err(ExecError::CommandFailure {
            command: full.to_string(),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        });
    }
    Ok(output.status)
}

#[cfg(unix)]
fn exec_command(ctx: &ShellContext, full: &str) -> Result<ExitStatus> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure.
    let err = shell_command(ctx, full).exec();
    Err(spawn_error(full, err))
}

/// Process replacement is unavailable off Unix; the closest approximation is
/// a synchronous child whose exit code this process adopts.
#[cfg(not(unix))]
fn exec_command(ctx: &ShellContext, full: &str) -> Result<ExitStatus> {
    let status = shell_command(ctx, full)
        .status()
        .map_err(|e| spawn_error(full, e))?;
    std::process::exit(status.code().unwrap_or(1));
}

fn spawn_error(full: &str, source: std::io::Error) -> ExecError {
    ExecError::CommandFailed {
        command: full.to_string(),
        source,
    }
}
