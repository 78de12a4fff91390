use chrono::Local;
use std::process::Command;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Human-facing stderr logger for build scripts. Respects `RUST_LOG`.
pub fn init_stderr_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(LocalTimeFormatter)
        .with_ansi(true)
        .with_target(false)
        .with_line_number(false)
        .with_file(false)
        .with_level(true)
        .init();
}

/// Render a [`Command`] roughly the way it would be typed at a shell.
pub fn format_command_for_display(command: &Command) -> String {
    let program = command.get_program().to_string_lossy();
    let args = command
        .get_args()
        .map(|arg| {
            let s = arg.to_string_lossy();
            if s.contains(char::is_whitespace) || s.is_empty() {
                format!("'{}'", s)
            } else {
                s.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}", program, args)
}

/// Echo a constructed [`Command`] when verbose, and always record it at
/// debug level.
pub fn log_command(verbose: bool, command: &Command) {
    let command_str = format_command_for_display(command);
    log_shell_command(verbose, &command_str);
}

/// Echo a fully constructed shell command line when verbose, and always
/// record it at debug level.
pub fn log_shell_command(verbose: bool, command_line: &str) {
    if verbose {
        println!("{}", command_line);
    }
    tracing::debug!("[CMD] {}", command_line);
}

#[cfg(test)]
mod tests {
    use super::{format_command_for_display, init_stderr_logger};
    use std::process::Command;

    #[test]
    fn stderr_logger_initializes() {
        init_stderr_logger(true);
        tracing::debug!("logger ready");
    }

    #[test]
    fn test_format_plain_args() {
        let mut cmd = Command::new("cargo");
        cmd.arg("install").arg("--locked").arg("migrate");
        assert_eq!(
            format_command_for_display(&cmd),
            "cargo install --locked migrate"
        );
    }

    #[test]
    fn test_format_quotes_whitespace_args() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo hello");
        assert_eq!(format_command_for_display(&cmd), "sh -c 'echo hello'");
    }

    #[test]
    fn test_format_quotes_empty_args() {
        let mut cmd = Command::new("printf");
        cmd.arg("");
        assert_eq!(format_command_for_display(&cmd), "printf ''");
    }
}
