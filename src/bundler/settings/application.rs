//! Application identity and launch configuration.

use std::{collections::BTreeMap, path::PathBuf};

/// Application configuration forwarded to the packaging engine.
///
/// Optional fields are `None` when not configured. [`SettingsBuilder`] turns
/// empty strings and non-positive dimensions into `None`, so an unset field is
/// never sent to the engine as an empty placeholder.
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Debug, Clone, Default)]
pub struct ApplicationSettings {
    /// Fully qualified application class
    pub main_class: String,

    /// Preloader class.
    ///
    /// Default: None
    pub preloader_class: Option<String>,

    /// Application id; defaults to the project artifact id
    pub id: String,

    /// Application name; defaults to the project artifact id
    pub name: String,

    /// Window/installer title; defaults to the name
    pub title: String,

    /// Description; defaults to the project description.
    ///
    /// Default: None
    pub description: Option<String>,

    /// Vendor shown by installers.
    ///
    /// Default: None
    pub vendor: Option<String>,

    /// Installer menu category.
    ///
    /// Default: None
    pub category: Option<String>,

    /// Copyright notice.
    ///
    /// Default: None
    pub copyright: Option<String>,

    /// Initial window width in pixels.
    ///
    /// Default: None
    pub width: Option<u32>,

    /// Initial window height in pixels.
    ///
    /// Default: None
    pub height: Option<u32>,

    /// Icon files, absolute.
    pub icons: Vec<PathBuf>,

    /// Request all permissions for web deployment.
    pub all_permissions: bool,

    /// Extra JVM arguments, in order.
    pub jvm_args: Vec<String>,

    /// JVM system properties.
    pub jvm_props: BTreeMap<String, String>,

    /// Engine verbosity.
    pub verbose: bool,
}
