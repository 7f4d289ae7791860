// src/models.rs

use serde::Deserialize;
use std::collections::BTreeMap;

/// Options for a single invocation, built once from CLI flags and the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Print the intermediate steps (clipboard fallback, file lookup, overrides).
    pub verbose: bool,
    /// Copy the generated command to the system clipboard.
    pub copy_to_clipboard: bool,
    /// Only print the generated command, never run it.
    pub skip_execution: bool,
    /// Replaces the default Gradle task in every branch. Never `Some("")`.
    pub task_override: Option<String>,
    /// Shell used to run the generated command. `None` means the platform default.
    pub shell: Option<String>,
}

impl Options {
    /// Returns the task override, treating an empty string as unset.
    pub fn task_override(&self) -> Option<&str> {
        self.task_override.as_deref().filter(|task| !task.is_empty())
    }
}

/// The on-disk shape of `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct FileConfig {
    /// Default for `--verbose`.
    pub verbose: Option<bool>,
    /// Default for `--copy-to-clipboard`.
    pub copy_to_clipboard: Option<bool>,
    /// Default for `--no-execute`.
    pub no_execute: Option<bool>,
    /// Default for `--task`.
    pub task: Option<String>,
    /// Shell running the generated command.
    pub shell: Option<String>,
    /// Keys grad does not know. Reported, never fatal.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl FileConfig {
    /// Names of the keys that were ignored, in sorted order.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.unknown.keys().map(String::as_str).collect()
    }
}
