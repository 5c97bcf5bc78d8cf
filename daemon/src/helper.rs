/// External helper process runner.
///
/// Host integration is delegated to small helper executables on PATH
/// (view lookup, orientation changes, idle reset). A helper answers via
/// its exit status and stdout; stderr is inherited so helper diagnostics
/// land in the daemon's own log.
use std::process::{Command, Stdio};

/// Exit status and captured stdout of one helper invocation.
pub struct HelperOutput {
    pub status: i32,
    pub stdout: String,
}

impl HelperOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Stdout with surrounding whitespace (usually a trailing newline) removed.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Runs `command` with `args` and waits for it to exit.
///
/// A helper killed by a signal reports status -1.
pub fn run(command: &str, args: &[&str]) -> std::io::Result<HelperOutput> {
    let output = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()?;

    Ok(HelperOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_zero_exit_status() {
        let out = run("true", &[]).unwrap();
        assert_eq!(out.status, 0);
        assert!(out.success());
    }

    #[test]
    fn run_captures_nonzero_exit_status() {
        let out = run("false", &[]).unwrap();
        assert_eq!(out.status, 1);
        assert!(!out.success());
    }

    #[test]
    fn run_captures_stdout() {
        let out = run("echo", &["hello", "world"]).unwrap();
        assert_eq!(out.stdout, "hello world\n");
        assert_eq!(out.trimmed(), "hello world");
    }

    #[test]
    fn run_missing_command_is_an_error() {
        assert!(run("definitely-not-a-real-helper-command", &[]).is_err());
    }
}
