// src/cli/console.rs

use colored::Colorize;

/// User-facing output. Messages on the verbose channel are dropped unless verbose
/// output was requested; everything else is always shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbose: bool,
}

impl Console {
    /// `verbose` decides whether the `verbose_*` methods print anything.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a success or progress message in green.
    pub fn ok(&self, message: &str) {
        println!("{}", message.green());
    }

    /// Prints a notice in yellow.
    pub fn warning(&self, message: &str) {
        println!("{}", message.yellow());
    }

    /// Prints a failure in bold red on stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }

    /// Prints the generated command, highlighted so it stands out from Gradle's output.
    pub fn command(&self, command: &str) {
        println!("{} {}\n", t!("driver.info.command_label").green(), command.bold());
    }

    /// `ok`, in verbose mode only.
    pub fn verbose_ok(&self, message: &str) {
        if self.verbose {
            self.ok(message);
        }
    }

    /// `warning`, in verbose mode only.
    pub fn verbose_warning(&self, message: &str) {
        if self.verbose {
            self.warning(message);
        }
    }
}
