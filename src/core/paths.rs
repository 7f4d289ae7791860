// src/core/paths.rs

use crate::constants::{CONFIG_ENV_VAR, CONFIG_FILENAME, GRAD_DIR};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to compute a configuration location.
#[derive(Error, Debug)]
pub enum PathError {
    /// `dirs` could not determine a home directory.
    #[error("Could not find the user's home directory.")]
    HomeDirNotFound,
}

/// Returns the fallback configuration directory (`~/.grad`).
///
/// Unlike a cache directory, it is never created: a missing directory simply means
/// there is no fallback configuration.
pub fn get_grad_config_dir() -> Result<PathBuf, PathError> {
    dirs::home_dir()
        .map(|home| home.join(GRAD_DIR))
        .ok_or(PathError::HomeDirNotFound)
}

/// Lists the configuration files to try, in priority order, for the process environment.
pub fn config_file_candidates(cwd: &Path) -> Vec<PathBuf> {
    let explicit = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let fallback_dir = match get_grad_config_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            log::debug!("{}. Skipping the fallback configuration.", e);
            None
        }
    };
    candidates_from(explicit, cwd, fallback_dir)
}

/// Orders the candidates: the explicit file, then the working directory, then the
/// fallback directory.
fn candidates_from(
    explicit: Option<PathBuf>,
    cwd: &Path,
    fallback_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    candidates.extend(explicit.filter(|path| !path.as_os_str().is_empty()));
    candidates.push(cwd.join(CONFIG_FILENAME));
    candidates.extend(fallback_dir.map(|dir| dir.join(CONFIG_FILENAME)));
    candidates
}
