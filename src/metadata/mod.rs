//! Project configuration from `jfx-bundle.toml`.
//!
//! The file carries what a host build would otherwise inject: project
//! coordinates and layout, application identity and the resolved
//! dependencies to ship. Relative paths are resolved against the directory
//! holding the file.

use crate::bundler::{BundleType, ProjectSettings, ResolvedDependency, Settings, SettingsBuilder};
use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "jfx-bundle.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    pub project: ProjectSection,
    pub application: ApplicationSection,
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencySection>,
}

/// `[project]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub description: Option<String>,
    /// Default: `<artifact_id>-<version>`
    pub final_name: Option<String>,
    /// Default: `<build_directory>/<final_name>.jar`
    pub artifact: Option<PathBuf>,
    /// Default: `target`
    pub build_directory: Option<PathBuf>,
}

/// `[application]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationSection {
    pub main_class: String,
    pub preloader_class: Option<String>,
    pub bundle_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub copyright: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[serde(default)]
    pub icons: Vec<PathBuf>,
    #[serde(default)]
    pub all_permissions: bool,
    #[serde(default)]
    pub jvm_args: Vec<String>,
    #[serde(default)]
    pub jvm_props: BTreeMap<String, String>,
    pub verbose: Option<bool>,
}

/// `[[dependency]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencySection {
    pub group_id: String,
    pub file: PathBuf,
}

/// Reads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<BundleConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    parse_config(&content)
}

/// Parses configuration text.
pub fn parse_config(content: &str) -> Result<BundleConfig> {
    Ok(toml::from_str(content)?)
}

impl BundleConfig {
    /// Turns the configuration into [`Settings`].
    ///
    /// `base_dir` anchors relative paths; `bundle_type` overrides the
    /// configured one.
    pub fn into_settings(self, base_dir: &Path, bundle_type: Option<BundleType>) -> Result<Settings> {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base_dir.join(p) };

        let project = self.project;
        let final_name = project
            .final_name
            .unwrap_or_else(|| format!("{}-{}", project.artifact_id, project.version));
        let build_directory = resolve(project.build_directory.unwrap_or_else(|| "target".into()));
        let artifact = project
            .artifact
            .map(resolve)
            .unwrap_or_else(|| build_directory.join(format!("{final_name}.jar")));

        let bundle_type = match (bundle_type, self.application.bundle_type.as_deref()) {
            (Some(explicit), _) => explicit,
            (None, Some(name)) => name.parse()?,
            (None, None) => BundleType::default(),
        };

        let app = self.application;
        let mut builder = SettingsBuilder::new()
            .project(ProjectSettings {
                group_id: project.group_id,
                artifact_id: project.artifact_id,
                version: project.version,
                description: project.description,
                final_name,
                artifact,
                build_directory,
            })
            .main_class(app.main_class)
            .preloader_class(app.preloader_class)
            .bundle_type(bundle_type)
            .id(app.id)
            .name(app.name)
            .title(app.title)
            .description(app.description)
            .vendor(app.vendor)
            .category(app.category)
            .copyright(app.copyright)
            .width(app.width)
            .height(app.height)
            .icons(app.icons.into_iter().map(resolve).collect())
            .all_permissions(app.all_permissions)
            .jvm_args(app.jvm_args)
            .jvm_props(app.jvm_props)
            .dependencies(
                self.dependencies
                    .into_iter()
                    .map(|d| ResolvedDependency::new(d.group_id, resolve(d.file)))
                    .collect(),
            );
        if let Some(verbose) = app.verbose {
            builder = builder.verbose(verbose);
        }

        Ok(builder.build()?)
    }
}
