// src/system/executor.rs

use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Why a command did not complete successfully.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The shell itself could not be started.
    #[error("Could not launch '{shell}' to run '{command}': {source}")]
    Launch {
        /// The shell that failed to start.
        shell: String,
        /// The command it was asked to run.
        command: String,
        /// The spawn error.
        #[source]
        source: io::Error,
    },
    /// The command ran and exited with a failure status.
    #[error("Command '{command}' exited with a non-zero status ({status}).")]
    NonZeroExit {
        /// The command that failed.
        command: String,
        /// Its exit status.
        status: ExitStatus,
    },
}

/// Runs a command line to completion.
pub trait CommandRunner: fmt::Debug {
    /// Runs `command_line` in `cwd`, blocking until it exits.
    fn run(&self, command_line: &str, cwd: &Path) -> Result<(), ExecutionError>;
}

/// Runs command lines through a shell, so they behave exactly as if pasted in a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    /// Uses `shell` if given, otherwise the platform default.
    pub fn new(shell: Option<&str>) -> Self {
        Self {
            shell: resolve_shell(shell, std::env::var("SHELL").ok()),
        }
    }

    /// The shell program command lines are handed to.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    fn build_command(&self, command_line: &str, cwd: &Path) -> StdCommand {
        let mut command = StdCommand::new(&self.shell);
        command.arg(shell_command_flag(&self.shell));
        command
            .arg(command_line)
            .current_dir(dunce::simplified(cwd))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str, cwd: &Path) -> Result<(), ExecutionError> {
        let trimmed_command = command_line.trim();
        if trimmed_command.is_empty() {
            return Ok(()); // Nothing to run is not a failure.
        }

        log::debug!("Running '{}' via '{}' in '{}'", trimmed_command, self.shell, cwd.display());
        let status = self
            .build_command(trimmed_command, cwd)
            .status()
            .map_err(|source| ExecutionError::Launch {
                shell: self.shell.clone(),
                command: trimmed_command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ExecutionError::NonZeroExit {
                command: trimmed_command.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Picks the shell: the configured one, then `$SHELL`, then the platform default.
fn resolve_shell(configured: Option<&str>, env_shell: Option<String>) -> String {
    let configured = configured.map(str::trim).filter(|s| !s.is_empty());
    if let Some(shell) = configured {
        return shell.to_string();
    }
    if cfg!(target_os = "windows") {
        return "cmd".to_string();
    }
    env_shell
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "sh".to_string())
}

/// `cmd` takes its command after `/C`; every other shell after `-c`.
fn shell_command_flag(shell: &str) -> &'static str {
    let program = Path::new(shell)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if program == "cmd" { "/C" } else { "-c" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_shell_wins() {
        assert_eq!(resolve_shell(Some("zsh"), Some("/bin/bash".to_string())), "zsh");
    }

    #[cfg(unix)]
    #[test]
    fn test_env_shell_then_sh() {
        assert_eq!(resolve_shell(None, Some("/bin/bash".to_string())), "/bin/bash");
        assert_eq!(resolve_shell(Some("  "), None), "sh");
    }

    #[test]
    fn test_shell_command_flag() {
        assert_eq!(shell_command_flag("cmd"), "/C");
        assert_eq!(shell_command_flag("cmd.exe"), "/C");
        assert_eq!(shell_command_flag("/bin/zsh"), "-c");
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        let runner = ShellRunner::new(Some("sh"));
        assert!(runner.run("exit 0", Path::new(".")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_reports_status() {
        let runner = ShellRunner::new(Some("sh"));
        let result = runner.run("exit 3", Path::new("."));
        match result {
            Err(ExecutionError::NonZeroExit { command, status }) => {
                assert_eq!(command, "exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected NonZeroExit, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_shell_is_a_launch_error() {
        let runner = ShellRunner::new(Some("/definitely/not/a/shell"));
        let result = runner.run("echo hi", Path::new("."));
        assert!(matches!(result, Err(ExecutionError::Launch { .. })));
    }

    #[test]
    fn test_empty_command_is_a_no_op() {
        let runner = ShellRunner::new(Some("/definitely/not/a/shell"));
        assert!(runner.run("   ", Path::new(".")).is_ok());
    }
}
