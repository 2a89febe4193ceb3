//! Package phase orchestration.
//!
//! The [`Packager`] turns a built project artifact into an executable jar and
//! a set of native bundles, then hands the outputs to the attach phase.
//!
//! # Overview
//!
//! 1. Unpack the project artifact and have the engine build an executable jar
//! 2. Replace the project artifact with that jar
//! 3. Stage dependencies as `<groupId>-<fileName>`
//! 4. Have the engine generate web deployment files and native bundles
//! 5. Classify and attach the outputs
//!
//! # Module Organization
//!
//! - [`jar`] - executable jar creation and artifact swap
//! - [`dependencies`] - dependency staging
//! - [`orchestrator`] - main [`Packager`] struct

mod dependencies;
mod jar;
mod orchestrator;

pub use dependencies::stage_dependencies;
pub use jar::{packaging_request, repackage};
pub use orchestrator::{PackageOutcome, Packager};
