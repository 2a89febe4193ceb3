//! Artifact store seam and the local repository implementation.

use super::ArtifactCoordinate;
use crate::bundler::{
    error::{Context, ErrorExt, Result},
    utils::fs,
};
use std::{
    future::Future,
    path::{Path, PathBuf},
};

/// Persists artifacts by coordinate.
pub trait ArtifactStore {
    /// Installs `file` under `coordinate`, with `descriptor` as its metadata.
    ///
    /// Returns the installed artifact location.
    fn install(
        &self,
        file: &Path,
        coordinate: &ArtifactCoordinate,
        descriptor: &Path,
    ) -> impl Future<Output = Result<PathBuf>> + Send;
}

/// Maven-layout repository on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    /// Repository rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.m2/repository`
    pub fn default_location() -> Result<PathBuf> {
        let home = dirs::home_dir().context("cannot determine home directory")?;
        Ok(home.join(".m2").join("repository"))
    }

    /// Repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactStore for LocalRepository {
    async fn install(
        &self,
        file: &Path,
        coordinate: &ArtifactCoordinate,
        descriptor: &Path,
    ) -> Result<PathBuf> {
        let target = self.root.join(coordinate.local_path());
        let pom = self.root.join(coordinate.descriptor_path());

        log::debug!("Installing {} to {}", file.display(), target.display());
        fs::copy_file(file, &target).await?;

        tokio::fs::copy(descriptor, &pom)
            .await
            .fs_context("installing descriptor", &pom)?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn installs_into_maven_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let jar = tmp.path().join("jfxrt.jar");
        let pom = tmp.path().join("desc.pom");
        tokio::fs::write(&jar, b"jar-bytes").await.unwrap();
        tokio::fs::write(&pom, b"<project/>").await.unwrap();

        let repo = LocalRepository::new(tmp.path().join("repo"));
        let coordinate = ArtifactCoordinate::javafx("jfxrt", "2.2.3");
        let installed = repo.install(&jar, &coordinate, &pom).await.unwrap();

        assert_eq!(
            installed,
            tmp.path().join("repo/com/sun/javafx/jfxrt/2.2.3/jfxrt-2.2.3.jar")
        );
        assert_eq!(tokio::fs::read(&installed).await.unwrap(), b"jar-bytes");
        assert!(
            tmp.path()
                .join("repo/com/sun/javafx/jfxrt/2.2.3/jfxrt-2.2.3.pom")
                .exists()
        );
    }

    #[tokio::test]
    async fn reinstall_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let jar = tmp.path().join("jfxrt.jar");
        let pom = tmp.path().join("desc.pom");
        tokio::fs::write(&jar, b"same").await.unwrap();
        tokio::fs::write(&pom, b"<project/>").await.unwrap();

        let repo = LocalRepository::new(tmp.path().join("repo"));
        let coordinate = ArtifactCoordinate::javafx("jfxrt", "2.2.3");
        let first = repo.install(&jar, &coordinate, &pom).await.unwrap();
        let second = repo.install(&jar, &coordinate, &pom).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(tokio::fs::read(&second).await.unwrap(), b"same");
        let entries = std::fs::read_dir(second.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 2);
    }
}
