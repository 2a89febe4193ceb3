//! Command line interface for jfx-bundler.
//!
//! This module provides the CLI for bundler operations, with argument
//! parsing, command execution and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, InstallArgs, PackageArgs, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{BundlerError, CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| BundlerError::Cli(CliError::InvalidArguments { reason }))?;

    let config = RuntimeConfig::from(&args);
    match &args.command {
        Command::Install(install) => commands::install::execute(install, &config).await,
        Command::Package(package) => commands::package::execute(package, &config).await,
    }
}
