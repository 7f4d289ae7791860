//! # Config Loader
//!
//! Finds the optional `config.toml`, parses it, and merges it with the command line
//! into the immutable `Options` used for the rest of the run.
//!
//! A missing file is the normal case and never an error. A file that exists but
//! cannot be read or parsed is reported to the user, and the run goes on with the
//! default configuration. Unknown keys are ignored and reported the same way.

use crate::{
    cli::Cli,
    core::paths,
    models::{FileConfig, Options},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// A config file that exists but is unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Read {
        /// The file that failed.
        path: String,
        #[source]
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid TOML, or a known key has the wrong type.
    #[error("Invalid config file '{path}': {source}")]
    Parse {
        /// The file that failed.
        path: String,
        #[source]
        /// The parser's message, with line and column.
        source: toml::de::Error,
    },
}

/// The configuration found on disk, if any.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// The values read, or the defaults.
    pub file: FileConfig,
    /// The file the values were read from. `None` when no candidate existed.
    pub source: Option<PathBuf>,
}

/// Loads the configuration for a process running in `cwd`.
///
/// Never fails: an unusable file yields the defaults, and the error is handed back
/// so the caller can warn about it.
pub fn load(cwd: &Path) -> (LoadedConfig, Option<ConfigError>) {
    load_or_default(&paths::config_file_candidates(cwd))
}

/// Like `load_first_existing`, but falls back to the defaults on error.
pub fn load_or_default(candidates: &[PathBuf]) -> (LoadedConfig, Option<ConfigError>) {
    match load_first_existing(candidates) {
        Ok(loaded) => (loaded, None),
        Err(e) => {
            log::debug!("Falling back to the default configuration: {}", e);
            (LoadedConfig::default(), Some(e))
        }
    }
}

/// Loads the first candidate that exists. Later candidates are not merged in.
pub fn load_first_existing(candidates: &[PathBuf]) -> Result<LoadedConfig, ConfigError> {
    for candidate in candidates {
        if !candidate.is_file() {
            log::trace!("No config at '{}'", candidate.display());
            continue;
        }

        let content = fs::read_to_string(candidate).map_err(|source| ConfigError::Read {
            path: candidate.display().to_string(),
            source,
        })?;
        let file = parse_config(&content, candidate)?;
        log::debug!("Loaded config from '{}': {:?}", candidate.display(), file);

        return Ok(LoadedConfig {
            file,
            source: Some(candidate.clone()),
        });
    }

    log::debug!("No config file found among {:?}", candidates);
    Ok(LoadedConfig::default())
}

/// Parses the TOML content of a config file. `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Merges command line flags over file values.
///
/// A boolean flag present on the command line wins; otherwise the file decides, and a
/// key missing from both is `false`. `--task` wins over `task`, and an empty task from
/// either source counts as unset.
pub fn build_options(cli: &Cli, file: &FileConfig) -> Options {
    let task_override = non_empty(cli.task.as_deref())
        .or_else(|| non_empty(file.task.as_deref()))
        .map(str::to_string);

    Options {
        verbose: cli.verbose || file.verbose.unwrap_or(false),
        copy_to_clipboard: cli.copy_to_clipboard || file.copy_to_clipboard.unwrap_or(false),
        skip_execution: cli.no_execute || file.no_execute.unwrap_or(false),
        task_override,
        shell: non_empty(file.shell.as_deref()).map(str::to_string),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("grad").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            verbose = true
            copy-to-clipboard = true
            no-execute = false
            task = "integrationTest"
            shell = "zsh"
        "#;

        let file = parse_config(content, Path::new("config.toml")).unwrap();

        assert_eq!(
            file,
            FileConfig {
                verbose: Some(true),
                copy_to_clipboard: Some(true),
                no_execute: Some(false),
                task: Some("integrationTest".to_string()),
                shell: Some("zsh".to_string()),
                unknown: Default::default(),
            }
        );
    }

    #[test]
    fn test_unknown_keys_are_kept_aside() {
        let file = parse_config("verbose = true\ncolor = false", Path::new("config.toml")).unwrap();

        assert_eq!(file.verbose, Some(true));
        assert_eq!(file.unknown_keys(), vec!["color"]);
    }

    #[test]
    fn test_wrong_type_for_known_key_is_a_parse_error() {
        let result = parse_config("verbose = \"yes\"", Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = TempDir::new().unwrap();
        let candidates = vec![dir.path().join("a.toml"), dir.path().join("b.toml")];

        let loaded = load_first_existing(&candidates).unwrap();

        assert!(loaded.source.is_none());
        assert_eq!(loaded.file, FileConfig::default());
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("local.toml");
        let fallback = dir.path().join("fallback.toml");
        fs::write(&local, "task = \"check\"").unwrap();
        fs::write(&fallback, "task = \"assemble\"\nverbose = true").unwrap();

        let loaded = load_first_existing(&[dir.path().join("absent.toml"), local.clone(), fallback])
            .unwrap();

        assert_eq!(loaded.source, Some(local));
        assert_eq!(loaded.file.task.as_deref(), Some("check"));
        assert_eq!(loaded.file.verbose, None);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        // YAML syntax from an older setup.
        fs::write(&path, "verbose: true").unwrap();

        let (loaded, error) = load_or_default(&[path]);

        assert!(matches!(error, Some(ConfigError::Parse { .. })));
        assert!(loaded.source.is_none());
        assert_eq!(loaded.file, FileConfig::default());
    }

    #[test]
    fn test_valid_file_loads_without_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "verbose = true").unwrap();

        let (loaded, error) = load_or_default(&[path.clone()]);

        assert!(error.is_none());
        assert_eq!(loaded.source, Some(path));
        assert_eq!(loaded.file.verbose, Some(true));
    }

    #[test]
    fn test_file_values_apply_without_flags() {
        let file = FileConfig {
            verbose: Some(true),
            no_execute: Some(true),
            task: Some("assemble".to_string()),
            ..Default::default()
        };

        let options = build_options(&cli(&[]), &file);

        assert!(options.verbose);
        assert!(options.skip_execution);
        assert!(!options.copy_to_clipboard);
        assert_eq!(options.task_override(), Some("assemble"));
    }

    #[test]
    fn test_flags_take_precedence() {
        let file = FileConfig {
            task: Some("assemble".to_string()),
            ..Default::default()
        };

        let options = build_options(&cli(&["-c", "-n", "--task", "check", "some/path"]), &file);

        assert!(options.copy_to_clipboard);
        assert!(options.skip_execution);
        assert_eq!(options.task_override(), Some("check"));
    }

    #[test]
    fn test_empty_tasks_are_unset() {
        let file = FileConfig {
            task: Some("  ".to_string()),
            ..Default::default()
        };

        let options = build_options(&cli(&["-t", ""]), &file);

        assert_eq!(options.task_override, None);
    }
}
