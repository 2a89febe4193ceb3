//! Command line argument parsing and validation.
//!
//! This module provides the CLI argument parsing using clap, with proper
//! validation and error handling.

use crate::bundler::BundleType;
use crate::metadata::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JavaFX application packager
#[derive(Parser, Debug)]
#[command(
    name = "jfx-bundler",
    version,
    about = "JavaFX application packager",
    long_about = "Installs the JavaFX runtime into a local Maven repository and packages JavaFX
applications into executable jars and native installers.

Usage:
  jfx-bundler install --java-home /usr/lib/jvm/jdk1.8.0
  jfx-bundler package --config jfx-bundle.toml --bundle-type all

Exit code 0 = every phase completed and its outputs exist."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print detailed progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install jfxrt.jar and ant-javafx.jar from a JDK into a local repository
    Install(InstallArgs),

    /// Build the executable jar and native bundles for a project
    Package(PackageArgs),
}

/// Arguments of `install`
#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// JDK or JRE carrying JavaFX
    #[arg(long, env = "JAVA_HOME", value_name = "DIR")]
    pub java_home: PathBuf,

    /// Local repository root (default: ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub repository: Option<PathBuf>,
}

/// Arguments of `package`
#[derive(clap::Args, Debug)]
pub struct PackageArgs {
    /// Project configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Bundle type, overriding the configured one: none, all, image, installer, exe, msi, rpm, deb, dmg
    #[arg(short = 't', long, value_name = "TYPE")]
    pub bundle_type: Option<BundleType>,

    /// JDK to take the packaging tool from (falls back to PATH)
    #[arg(long, env = "JAVA_HOME", value_name = "DIR")]
    pub java_home: Option<PathBuf>,

    /// Kill the packaging tool after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Install(args) => {
                if args.java_home.as_os_str().is_empty() {
                    return Err("JAVA_HOME cannot be empty".to_string());
                }
            }
            Command::Package(args) => {
                if args.timeout == Some(0) {
                    return Err("Timeout must be at least one second".to_string());
                }
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
