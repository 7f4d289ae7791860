//! Generates the Gradle command for a file or folder of a multi-project build.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// Command line definition, console output and the invocation driver.
pub mod cli;
/// Fixed names, tasks and the command prefix.
pub mod constants;
/// Path transformation, file lookup and configuration.
pub mod core;
/// Options and the config file shape.
pub mod models;
pub mod system;
