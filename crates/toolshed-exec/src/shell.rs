use toolshed_core::constants::shells;

/// Quote a string for the shell, escaping embedded single quotes so the
/// original text passes through literally.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Wrap a raw command string in a `sh -c` indirection so quoting characters
/// inside it survive verbatim.
pub fn wrap_command(cmd: &str) -> String {
    format!("{} -c {}", shells::SH, shell_quote(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_quote_simple() {
        assert_eq!(shell_quote("hello"), "'hello'");
    }

    #[test]
    fn test_shell_quote_with_single_quote() {
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_shell_quote_with_spaces() {
        assert_eq!(shell_quote("hello world"), "'hello world'");
    }

    #[test]
    fn test_wrap_command() {
        assert_eq!(wrap_command("echo hi"), "sh -c 'echo hi'");
    }

    #[test]
    fn test_wrap_command_with_single_quotes() {
        assert_eq!(
            wrap_command("echo 'it is quoted'"),
            "sh -c 'echo '\\''it is quoted'\\'''"
        );
    }
}
