//! Attaching native engine outputs to the build.
//!
//! Two passes over the engine output directory:
//!
//! 1. Loose files (web deployment fragments) are moved into `javafx-jnlp`,
//!    archived as `<finalName>-jnlp.zip` and attached as `zip`/`jnlp`.
//! 2. Entries of `bundles/` are classified with [`classify`]: installers are
//!    attached by extension, `.app` directories are archived as
//!    `<finalName>-macosx.zip` and attached as `zip`/`macosx`, anything else
//!    is logged and skipped.

mod checksum;
mod classify;
mod manifest;

pub use checksum::file_digest;
pub use classify::{BundleKind, MAC_APP_SUFFIX, classify};
pub use manifest::{AttachmentManifest, ManifestEntry};

use crate::bundler::{
    error::{Error, Result},
    settings::ProjectSettings,
    utils::{archive, fs},
};
use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
};

/// Subdirectory of the engine output holding native bundles.
pub const BUNDLES_DIR: &str = "bundles";

/// Registers produced files as build artifacts.
pub trait BuildContext {
    /// Attaches `file` with the given type and classifier.
    fn attach(
        &mut self,
        artifact_type: &str,
        classifier: &str,
        file: &Path,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// A file registered with the [`BuildContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedArtifact {
    pub artifact_type: String,
    pub classifier: String,
    pub path: PathBuf,
}

impl AttachedArtifact {
    fn new(artifact_type: &str, classifier: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_type: artifact_type.to_string(),
            classifier: classifier.to_string(),
            path: path.into(),
        }
    }
}

/// Attaches everything under `native_dir` to `context`.
///
/// # Errors
///
/// [`Error::AttachmentIo`] when moving or archiving an output fails, or the
/// context's own error when it refuses an attachment. Unrecognised bundle
/// shapes are not errors.
pub async fn attach_outputs<C: BuildContext>(
    native_dir: &Path,
    project: &ProjectSettings,
    context: &mut C,
) -> Result<Vec<AttachedArtifact>> {
    let mut attached = Vec::new();

    if let Some(jnlp) = attach_loose_files(native_dir, project).await? {
        context
            .attach(&jnlp.artifact_type, &jnlp.classifier, &jnlp.path)
            .await?;
        attached.push(jnlp);
    }

    for artifact in archive_bundles(&native_dir.join(BUNDLES_DIR), project).await? {
        context
            .attach(&artifact.artifact_type, &artifact.classifier, &artifact.path)
            .await?;
        attached.push(artifact);
    }

    log::info!("Attached {} JavaFX artifact(s)", attached.len());
    Ok(attached)
}

fn attachment_io(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::AttachmentIo {
        path: path.to_path_buf(),
        source,
    }
}

/// Entries of `dir` with their directory flag; a missing `dir` has none.
async fn entries(dir: &Path) -> Result<Vec<(PathBuf, bool)>> {
    let paths = match fs::list_dir(dir).await {
        Ok(paths) => paths,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(attachment_io(dir)(e)),
    };

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(attachment_io(&path))?;
        entries.push((path, metadata.is_dir()));
    }
    Ok(entries)
}

async fn attach_loose_files(
    native_dir: &Path,
    project: &ProjectSettings,
) -> Result<Option<AttachedArtifact>> {
    let loose: Vec<PathBuf> = entries(native_dir)
        .await?
        .into_iter()
        .filter(|(_, is_dir)| !is_dir)
        .map(|(path, _)| path)
        .collect();
    if loose.is_empty() {
        return Ok(None);
    }

    let jnlp_dir = project.jnlp_dir();
    match tokio::fs::remove_dir_all(&jnlp_dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(attachment_io(&jnlp_dir)(e)),
    }
    tokio::fs::create_dir_all(&jnlp_dir)
        .await
        .map_err(attachment_io(&jnlp_dir))?;

    for file in &loose {
        let Some(name) = file.file_name() else {
            continue;
        };
        fs::move_file(file, &jnlp_dir.join(name))
            .await
            .map_err(attachment_io(file))?;
    }

    let zip = project.jnlp_zip();
    archive::zip_dir(&jnlp_dir, &zip, None)
        .await
        .map_err(attachment_io(&zip))?;
    log::debug!("Archived {} web deployment file(s) into {}", loose.len(), zip.display());

    Ok(Some(AttachedArtifact::new("zip", "jnlp", zip)))
}

async fn archive_bundles(
    bundles_dir: &Path,
    project: &ProjectSettings,
) -> Result<Vec<AttachedArtifact>> {
    let mut artifacts = Vec::new();
    let mut app_archived = false;

    for (path, is_dir) in entries(bundles_dir).await? {
        match classify(&path, is_dir) {
            BundleKind::Installer { extension } => {
                artifacts.push(AttachedArtifact::new(&extension, &extension, path));
            }
            // Only one macosx zip can be attached; entries arrive sorted by name
            BundleKind::MacApp if app_archived => {
                log::warn!(
                    "Application image {} not attached, one is already archived",
                    path.display()
                );
            }
            BundleKind::MacApp => {
                app_archived = true;
                let zip = project.macosx_zip();
                let root = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                archive::zip_dir(&path, &zip, root.as_deref())
                    .await
                    .map_err(attachment_io(&path))?;
                artifacts.push(AttachedArtifact::new("zip", "macosx", zip));
            }
            BundleKind::Unknown => {
                log::warn!(
                    "Unrecognised native bundle {}, not attaching it",
                    path.display()
                );
            }
        }
    }

    Ok(artifacts)
}
