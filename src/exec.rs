//! External command execution with captured output
//!
//! Commands are spawned with an argument vector, never through a shell, and
//! their exit status and stderr are captured separately. The `CommandRunner`
//! trait is the seam the dialers are tested through: tests substitute stub
//! runners that return canned outcomes instead of spawning real processes.

use std::io;
use std::process::Command;

/// Captured result of an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes an external command and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Runs commands on the real system via `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_zero_exit() {
        let output = CommandOutput {
            code: Some(4),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!output.success());

        let killed = CommandOutput {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!killed.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_exit_code() {
        let output = SystemRunner.run("sh", &["-c", "exit 7"]).unwrap();
        assert_eq!(output.code, Some(7));
        assert!(!output.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stderr() {
        let output = SystemRunner
            .run("sh", &["-c", "echo oops >&2; exit 1"])
            .unwrap();
        assert!(output.stderr.contains("oops"));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let result = SystemRunner.run("definitely-not-a-real-binary-1234", &[]);
        assert!(result.is_err());
    }
}
