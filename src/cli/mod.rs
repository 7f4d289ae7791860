// src/cli/mod.rs

use clap::Parser;

/// Colored user-facing output.
pub mod console;
/// The path-to-command pipeline.
pub mod driver;

/// grad: Generate the Gradle 🐘 command for a given path, passed as argument or from clipboard.
#[derive(Parser, Debug, Default)]
#[command(
    name = "grad",
    author,
    version,
    about,
    long_about = t!("cli.long_about"),
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// File or folder path relative to the Gradle root project, or a bare test class name.
    /// Read from the clipboard when omitted.
    pub path: Option<String>,

    /// More verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Copy the generated command to the clipboard.
    #[arg(short, long)]
    pub copy_to_clipboard: bool,

    /// Do not automatically run the generated command but simply print it.
    #[arg(short, long)]
    pub no_execute: bool,

    /// Gradle task to run. Default 'integrationTest' for Java test classes, 'build' for folders.
    #[arg(short, long)]
    pub task: Option<String>,
}
