//! Command execution functions for bundler operations.

pub mod install;
pub mod package;
