// src/bin/grad.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use grad::{
    cli::{Cli, console::Console, driver::Driver},
    core::config_loader,
    system::{clipboard::SystemClipboard, executor::ShellRunner},
    t,
};
use std::env;

/// The main entry point of the `grad` application.
/// It sets up logging, parses arguments, runs the pipeline,
/// and performs centralized error handling.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_cli(Cli::parse()) {
        // Only a missing input gets here. Config problems and a failing Gradle build
        // are reported along the way and still exit with 0.
        eprintln!("\n{}: {:#}", t!("error.prefix").red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let cwd = env::current_dir().context("Could not determine the current directory")?;
    let (loaded, config_error) = config_loader::load(&cwd);
    let options = config_loader::build_options(&cli, &loaded.file);
    log::debug!("Effective options: {:?}", options);

    let console = Console::new(options.verbose);
    if let Some(e) = config_error {
        console.warning(&format!(t!("config.warning.invalid"), error = e));
    }
    if !loaded.file.unknown.is_empty() {
        console.warning(&format!(
            t!("config.warning.unknown_keys"),
            keys = loaded.file.unknown_keys().join(", ")
        ));
    }
    match &loaded.source {
        Some(path) => console.verbose_ok(&format!(
            t!("config.verbose.loaded"),
            path = path.display()
        )),
        None => console.verbose_warning(t!("config.verbose.not_found")),
    }

    let mut clipboard = SystemClipboard::default();
    let runner = ShellRunner::new(options.shell.as_deref());
    if !options.skip_execution {
        console.verbose_ok(&format!(t!("driver.verbose.shell"), shell = runner.shell()));
    }

    let mut driver = Driver::new(&options, console, &mut clipboard, &runner, cwd);
    driver.run(cli.path)?;
    Ok(())
}
