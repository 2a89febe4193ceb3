//! Builder for constructing Settings.

use super::{ApplicationSettings, BundleType, ProjectSettings, ResolvedDependency, Settings};
use crate::bundler::error::{Context, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::{collections::BTreeMap, path::PathBuf};

/// Builder for constructing [`Settings`].
///
/// Accepts raw configuration values the way the host build supplies them and
/// normalises them: empty strings become "not set", dimensions `<= 0` are
/// dropped, identity fields fall back to project metadata and icons are made
/// absolute.
///
/// # Required
///
/// - [`project`](Self::project)
/// - [`main_class`](Self::main_class)
#[derive(Default)]
pub struct SettingsBuilder {
    project: Option<ProjectSettings>,
    main_class: Option<String>,
    preloader_class: Option<String>,
    bundle_type: BundleType,
    id: Option<String>,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    vendor: Option<String>,
    category: Option<String>,
    copyright: Option<String>,
    width: Option<i64>,
    height: Option<i64>,
    icons: Vec<PathBuf>,
    all_permissions: bool,
    jvm_args: Vec<String>,
    jvm_props: BTreeMap<String, String>,
    verbose: Option<bool>,
    dependencies: Vec<ResolvedDependency>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets project metadata and layout.
    pub fn project(mut self, project: ProjectSettings) -> Self {
        self.project = Some(project);
        self
    }

    /// Sets the application class.
    pub fn main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = Some(main_class.into());
        self
    }

    /// Sets the preloader class. Empty means unset.
    pub fn preloader_class(mut self, preloader: Option<String>) -> Self {
        self.preloader_class = preloader;
        self
    }

    /// Sets the bundle type.
    ///
    /// Default: [`BundleType::None`]
    pub fn bundle_type(mut self, bundle_type: BundleType) -> Self {
        self.bundle_type = bundle_type;
        self
    }

    /// Sets the application id. Defaults to the artifact id.
    pub fn id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    /// Sets the application name. Defaults to the artifact id.
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the title. Defaults to the application name.
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Sets the description. Defaults to the project description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the vendor.
    pub fn vendor(mut self, vendor: Option<String>) -> Self {
        self.vendor = vendor;
        self
    }

    /// Sets the installer category.
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Sets the copyright notice.
    pub fn copyright(mut self, copyright: Option<String>) -> Self {
        self.copyright = copyright;
        self
    }

    /// Sets the window width. Ignored unless positive.
    pub fn width(mut self, width: Option<i64>) -> Self {
        self.width = width;
        self
    }

    /// Sets the window height. Ignored unless positive.
    pub fn height(mut self, height: Option<i64>) -> Self {
        self.height = height;
        self
    }

    /// Sets icon files.
    pub fn icons(mut self, icons: Vec<PathBuf>) -> Self {
        self.icons = icons;
        self
    }

    /// Requests all permissions for web deployment.
    pub fn all_permissions(mut self, all: bool) -> Self {
        self.all_permissions = all;
        self
    }

    /// Sets JVM arguments.
    pub fn jvm_args(mut self, args: Vec<String>) -> Self {
        self.jvm_args = args;
        self
    }

    /// Sets JVM system properties.
    pub fn jvm_props(mut self, props: BTreeMap<String, String>) -> Self {
        self.jvm_props = props;
        self
    }

    /// Sets engine verbosity.
    ///
    /// Default: true
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Sets resolved dependencies.
    pub fn dependencies(mut self, dependencies: Vec<ResolvedDependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Fails when the project or a non-empty main class is missing, or when an
    /// icon path cannot be made absolute.
    pub fn build(self) -> Result<Settings> {
        let project = self.project.context("project settings are required")?;
        let main_class = non_empty(self.main_class).context("main class is required")?;

        let name = non_empty(self.name).unwrap_or_else(|| project.artifact_id.clone());
        let id = non_empty(self.id).unwrap_or_else(|| project.artifact_id.clone());
        let title = non_empty(self.title).unwrap_or_else(|| name.clone());
        let description = non_empty(self.description).or_else(|| non_empty(project.description.clone()));

        let icons = self
            .icons
            .iter()
            .map(|icon| {
                icon.absolutize()
                    .map(|p| p.into_owned())
                    .fs_context("resolving icon path", icon)
            })
            .collect::<Result<Vec<_>>>()?;

        let application = ApplicationSettings {
            main_class,
            preloader_class: non_empty(self.preloader_class),
            id,
            name,
            title,
            description,
            vendor: non_empty(self.vendor),
            category: non_empty(self.category),
            copyright: non_empty(self.copyright),
            width: positive(self.width),
            height: positive(self.height),
            icons,
            all_permissions: self.all_permissions,
            jvm_args: self.jvm_args,
            jvm_props: self.jvm_props,
            verbose: self.verbose.unwrap_or(true),
        };

        Ok(Settings::new(
            project,
            application,
            self.bundle_type,
            self.dependencies,
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive(value: Option<i64>) -> Option<u32> {
    value
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
}
