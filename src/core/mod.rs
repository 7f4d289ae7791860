// src/core/mod.rs

pub mod config_loader;
/// Finds a file by name under a root directory.
pub mod locator;
/// Where the config file is looked up.
pub mod paths;
pub mod transformer;
