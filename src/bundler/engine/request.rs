//! Requests handed to the native packaging engine.

use crate::bundler::settings::{BundleType, Settings};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Files to embed, relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Directory the files are taken from
    pub base_dir: PathBuf,
    /// File inside `base_dir` to include; empty includes the whole directory
    pub include: String,
}

impl Resource {
    /// Whole directory.
    pub fn dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            include: String::new(),
        }
    }

    /// Single file inside a directory.
    pub fn file(base_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            include: name.into(),
        }
    }
}

/// Request to produce an executable jar.
#[derive(Debug, Clone)]
pub struct PackagingRequest {
    pub main_class: String,
    /// Only set when configured
    pub preloader_class: Option<String>,
    pub verbose: bool,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub resources: Vec<Resource>,
}

impl PackagingRequest {
    /// Path of the jar the engine will write.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

/// Request to produce web deployment files and native bundles.
///
/// Optional fields are `None` unless configured with a non-empty value.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub copyright: Option<String>,
    pub version: String,
    pub main_class: String,
    pub preloader_class: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub icons: Vec<PathBuf>,
    pub all_permissions: bool,
    pub jvm_args: Vec<String>,
    pub jvm_props: BTreeMap<String, String>,
    pub bundle_type: BundleType,
    pub verbose: bool,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub resources: Vec<Resource>,
}

impl DeploymentRequest {
    /// Builds a request from settings, writing into `output_dir`.
    ///
    /// Resources are added separately with [`DeploymentRequest::add_resource`].
    pub fn from_settings(settings: &Settings, output_dir: &Path) -> Self {
        let app = settings.application();
        let project = settings.project();

        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            title: app.title.clone(),
            description: app.description.clone(),
            vendor: app.vendor.clone(),
            category: app.category.clone(),
            copyright: app.copyright.clone(),
            version: project.version.clone(),
            main_class: app.main_class.clone(),
            preloader_class: app.preloader_class.clone(),
            width: app.width,
            height: app.height,
            icons: app.icons.clone(),
            all_permissions: app.all_permissions,
            jvm_args: app.jvm_args.clone(),
            jvm_props: app.jvm_props.clone(),
            bundle_type: settings.bundle_type(),
            verbose: app.verbose,
            output_dir: output_dir.to_path_buf(),
            output_file: project.final_name.clone(),
            resources: Vec::new(),
        }
    }

    /// Registers a resource.
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }
}
