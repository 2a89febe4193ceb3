//! Package command orchestration.
//!
//! This module provides the [`Packager`] that runs the package phases in
//! strict sequence: repackage the jar, stage dependencies, generate bundles,
//! attach outputs.

use super::{dependencies::stage_dependencies, jar::repackage};
use crate::bundler::{
    attach::{AttachedArtifact, BuildContext, attach_outputs},
    engine::{DeploymentRequest, NativeEngine, Resource},
    error::{Context, Error, Result},
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// What a package run produced.
#[derive(Debug, Clone)]
pub struct PackageOutcome {
    /// Executable jar inside `javafx-create-jar`
    pub packaged_jar: PathBuf,
    /// Engine output directory (`javafx-native`)
    pub native_dir: PathBuf,
    /// Artifacts registered with the build context
    pub attachments: Vec<AttachedArtifact>,
}

/// Runs the package phases against a [`NativeEngine`].
///
/// Each phase completes before the next starts; the first failure aborts the
/// run and staging directories are left in place for inspection.
///
/// # Examples
///
/// ```no_run
/// use jfx_bundler::bundler::{AttachmentManifest, JavaPackager, Packager, Settings};
///
/// # async fn example(settings: Settings) -> jfx_bundler::bundler::Result<()> {
/// let engine = JavaPackager::locate(None)?;
/// let mut manifest = AttachmentManifest::new(settings.project());
/// let packager = Packager::new(&engine, settings);
///
/// let outcome = packager.package(&mut manifest).await?;
/// println!("Attached {} artifact(s)", outcome.attachments.len());
/// # Ok(())
/// # }
/// ```
pub struct Packager<'a, E> {
    engine: &'a E,
    settings: Settings,
}

impl<E> std::fmt::Debug for Packager<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packager")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<'a, E: NativeEngine> Packager<'a, E> {
    /// Creates a packager for `settings`.
    pub fn new(engine: &'a E, settings: Settings) -> Self {
        Self { engine, settings }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every phase and registers the outputs with `context`.
    pub async fn package<C: BuildContext>(&self, context: &mut C) -> Result<PackageOutcome> {
        let packaged_jar = repackage(self.engine, &self.settings).await?;
        let native_dir = self.generate_bundles(&packaged_jar).await?;
        let attachments = attach_outputs(&native_dir, self.settings.project(), context).await?;

        Ok(PackageOutcome {
            packaged_jar,
            native_dir,
            attachments,
        })
    }

    /// Stages dependencies and has the engine build bundles around
    /// `packaged_jar`.
    ///
    /// Returns the engine output directory.
    ///
    /// # Errors
    ///
    /// - [`Error::DependencyStaging`] when a dependency cannot be copied
    /// - [`Error::BundleGeneration`] when the engine fails
    pub async fn generate_bundles(&self, packaged_jar: &Path) -> Result<PathBuf> {
        let project = self.settings.project();
        let dependencies_dir = project.dependencies_dir();
        let native_dir = project.native_dir();

        let staged = stage_dependencies(self.settings.dependencies(), &dependencies_dir).await?;
        log::debug!("Staged {} dependencies", staged.len());

        let request = self.deployment_request(packaged_jar, &dependencies_dir, &native_dir).await?;

        fs::create_dir_all(&native_dir, true).await?;
        log::info!(
            "Generating native bundles ({}) in {}",
            request.bundle_type,
            native_dir.display()
        );
        self.engine
            .generate_native_bundles(&request)
            .await
            .map_err(|e| Error::BundleGeneration(Box::new(e)))?;

        Ok(native_dir)
    }

    async fn deployment_request(
        &self,
        packaged_jar: &Path,
        dependencies_dir: &Path,
        native_dir: &Path,
    ) -> Result<DeploymentRequest> {
        let jar_dir = packaged_jar
            .parent()
            .context("packaged jar has no parent directory")?;
        let jar_name = packaged_jar
            .file_name()
            .context("packaged jar has no file name")?
            .to_string_lossy();

        let mut request = DeploymentRequest::from_settings(&self.settings, native_dir);
        request.add_resource(Resource::file(jar_dir, jar_name));
        if fs::has_entries(dependencies_dir).await {
            request.add_resource(Resource::dir(dependencies_dir));
        }
        Ok(request)
    }
}
