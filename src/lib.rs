//! JavaFX packaging library
//!
//! This library provides the build-time pipeline for JavaFX applications:
//! - Installing `jfxrt.jar` and `ant-javafx.jar` into a local repository
//! - Repackaging a project jar into an executable JavaFX jar
//! - Generating native bundles (.exe, .msi, .rpm, .deb, .dmg, app images)
//! - Attaching the generated outputs as build artifacts
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
