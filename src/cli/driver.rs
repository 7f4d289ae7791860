// src/cli/driver.rs

use crate::{
    cli::console::Console,
    core::{locator, transformer},
    models::Options,
    system::{
        clipboard::{ClipboardAccess, ClipboardError},
        executor::{CommandRunner, ExecutionError},
    },
};
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the whole run. Every other failure is reported and skipped.
#[derive(Error, Debug)]
pub enum DriverError {
    /// No path argument was given and the clipboard could not supply one.
    #[error("No path argument given and the clipboard could not be read: {0}")]
    ClipboardRead(#[source] ClipboardError),
}

/// What a run did, for callers that need more than the console output.
#[derive(Debug)]
pub struct Outcome {
    /// The path handed to the transformer, after the file lookup.
    pub resolved_path: String,
    /// The generated Gradle command.
    pub command: String,
    /// Whether the command reached the clipboard.
    pub copied: bool,
    /// Whether the command was handed to the runner, successfully or not.
    pub executed: bool,
    /// Why the command failed, if it was run and failed.
    pub execution_error: Option<ExecutionError>,
}

/// Runs the path-to-command pipeline against its collaborators.
#[derive(Debug)]
pub struct Driver<'a> {
    options: &'a Options,
    console: Console,
    clipboard: &'a mut dyn ClipboardAccess,
    runner: &'a dyn CommandRunner,
    root: PathBuf,
}

impl<'a> Driver<'a> {
    /// `root` is both where bare file names are searched and where Gradle runs.
    pub fn new(
        options: &'a Options,
        console: Console,
        clipboard: &'a mut dyn ClipboardAccess,
        runner: &'a dyn CommandRunner,
        root: PathBuf,
    ) -> Self {
        Self {
            options,
            console,
            clipboard,
            runner,
            root,
        }
    }

    /// Generates the command for `input` (or the clipboard content), then copies
    /// and runs it as configured.
    ///
    /// # Errors
    /// Only when there is no input at all: `input` is `None` and the clipboard
    /// cannot be read. Failures later in the pipeline are printed and recorded in
    /// the returned `Outcome`.
    pub fn run(&mut self, input: Option<String>) -> Result<Outcome, DriverError> {
        let input = self.read_input(input)?;
        let resolved_path = self.resolve_path(input);

        if self.options.task_override().is_some() {
            // Only mention the override when the generated command actually uses a task.
            if let Some(task) = transformer::task_for(&resolved_path, self.options) {
                self.console
                    .verbose_ok(&format!(t!("driver.verbose.task_override"), task = task));
            }
        }
        let command = transformer::transform(&resolved_path, self.options);
        log::debug!("'{}' -> '{}'", resolved_path, command);

        let copied = self.options.copy_to_clipboard && self.copy(&command);

        self.console.command(&command);

        let (executed, execution_error) = if self.options.skip_execution {
            self.console.warning(t!("driver.info.not_executed"));
            (false, None)
        } else {
            (true, self.execute(&command))
        };

        Ok(Outcome {
            resolved_path,
            command,
            copied,
            executed,
            execution_error,
        })
    }

    fn read_input(&mut self, input: Option<String>) -> Result<String, DriverError> {
        if let Some(path) = input {
            self.console
                .verbose_warning(&format!(t!("driver.verbose.starting"), input = path));
            return Ok(path);
        }

        self.console
            .verbose_warning(t!("driver.verbose.reading_clipboard"));
        let text = self
            .clipboard
            .read_text()
            .map_err(DriverError::ClipboardRead)?;
        // Copied paths often come with a trailing newline.
        Ok(text.trim().to_string())
    }

    /// Replaces a bare file name with its path under the root. Anything not found
    /// is assumed to already be a path relative to the Gradle root project.
    fn resolve_path(&self, input: String) -> String {
        match locator::locate(&self.root, &input) {
            Ok(Some(found)) => {
                self.console
                    .verbose_ok(&format!(t!("driver.verbose.found_file"), path = found));
                found
            }
            Ok(None) => {
                self.console.verbose_warning(&format!(
                    t!("driver.verbose.file_not_found"),
                    name = input
                ));
                input
            }
            Err(e) => {
                self.console.error(&format!(
                    t!("driver.error.traversal"),
                    name = input,
                    error = e
                ));
                input
            }
        }
    }

    fn copy(&mut self, command: &str) -> bool {
        match self.clipboard.write_text(command) {
            Ok(()) => {
                self.console.warning(t!("driver.info.copied"));
                true
            }
            Err(e) => {
                self.console
                    .error(&format!(t!("driver.error.clipboard_write"), error = e));
                false
            }
        }
    }

    fn execute(&self, command: &str) -> Option<ExecutionError> {
        match self.runner.run(command, &self.root) {
            Ok(()) => None,
            Err(e) => {
                self.console
                    .error(&format!(t!("driver.error.execution"), error = e));
                Some(e)
            }
        }
    }
}
