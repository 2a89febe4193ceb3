//! Core Settings struct and implementations.

use super::{ApplicationSettings, BundleType, ProjectSettings, ResolvedDependency};

/// Main settings for a package run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which applies
/// defaults and normalises unset values.
///
/// # Examples
///
/// ```
/// use jfx_bundler::bundler::{BundleType, ProjectSettings, SettingsBuilder};
///
/// # fn example() -> jfx_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project(ProjectSettings {
///         group_id: "org.example".into(),
///         artifact_id: "hello".into(),
///         version: "1.0".into(),
///         final_name: "hello-1.0".into(),
///         artifact: "target/hello-1.0.jar".into(),
///         build_directory: "target".into(),
///         ..Default::default()
///     })
///     .main_class("org.example.HelloApp")
///     .bundle_type(BundleType::Image)
///     .build()?;
/// assert_eq!(settings.application().name, "hello");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    project: ProjectSettings,
    application: ApplicationSettings,
    bundle_type: BundleType,
    dependencies: Vec<ResolvedDependency>,
}

impl Settings {
    /// Returns the project metadata and layout.
    pub fn project(&self) -> &ProjectSettings {
        &self.project
    }

    /// Returns the application configuration.
    pub fn application(&self) -> &ApplicationSettings {
        &self.application
    }

    /// Returns the selected bundle type.
    pub fn bundle_type(&self) -> BundleType {
        self.bundle_type
    }

    /// Returns the resolved dependencies to stage.
    pub fn dependencies(&self) -> &[ResolvedDependency] {
        &self.dependencies
    }

    /// Returns the engine verbosity.
    pub fn verbose(&self) -> bool {
        self.application.verbose
    }

    pub(super) fn new(
        project: ProjectSettings,
        application: ApplicationSettings,
        bundle_type: BundleType,
        dependencies: Vec<ResolvedDependency>,
    ) -> Self {
        Self {
            project,
            application,
            bundle_type,
            dependencies,
        }
    }
}
