//! Configuration structures for packaging operations.
//!
//! Project metadata, application identity, bundle type selection and the
//! builder that turns raw configuration into validated [`Settings`].

mod application;
mod builder;
mod bundle_type;
mod core;
mod project;

pub use application::ApplicationSettings;
pub use builder::SettingsBuilder;
pub use bundle_type::BundleType;
pub use core::Settings;
pub use project::{ProjectSettings, ResolvedDependency};
