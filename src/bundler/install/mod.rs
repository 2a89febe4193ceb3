//! JavaFX runtime installation into an artifact store.
//!
//! # Overview
//!
//! 1. Locate `javafx.properties`, `jfxrt.jar` and `ant-javafx.jar` under JAVA_HOME
//! 2. Read the runtime version
//! 3. Install the runtime jar, then the tooling jar, each with a generated descriptor
//!
//! The first failed install aborts the run; the tooling jar is never installed
//! after a failed runtime install.

mod coordinate;
mod descriptor;
mod repository;

pub use coordinate::{ANT_ARTIFACT_ID, ArtifactCoordinate, GROUP_ID, RUNTIME_ARTIFACT_ID};
pub use descriptor::{DescriptorFile, render as render_descriptor};
pub use repository::{ArtifactStore, LocalRepository};

use crate::bundler::{
    error::{Error, Result},
    runtime::{self, ANT_JAR, JavaHome, PROPERTIES_FILE, RUNTIME_JAR},
};
use std::path::{Path, PathBuf};

/// Outcome of a successful runtime installation.
#[derive(Debug, Clone)]
pub struct InstalledRuntime {
    /// Runtime version read from `javafx.properties`
    pub version: String,
    /// Installed coordinates with their store locations, in install order
    pub artifacts: Vec<(ArtifactCoordinate, PathBuf)>,
}

impl InstalledRuntime {
    /// Dependency declaration for the runtime artifact.
    pub fn dependency_declaration(&self) -> String {
        ArtifactCoordinate::javafx(RUNTIME_ARTIFACT_ID, &self.version).dependency_declaration()
    }
}

/// Installs located files into an [`ArtifactStore`].
#[derive(Debug)]
pub struct ArtifactInstaller<'a, S> {
    store: &'a S,
}

impl<'a, S: ArtifactStore> ArtifactInstaller<'a, S> {
    /// Creates an installer over `store`.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Installs `file` as `com.sun.javafx:<artifact_id>:<version>@jar`.
    ///
    /// The temporary descriptor is deleted whether or not the store succeeds.
    ///
    /// # Errors
    ///
    /// [`Error::Installation`] wrapping the store failure.
    pub async fn install(&self, artifact_id: &str, version: &str, file: &Path) -> Result<PathBuf> {
        let coordinate = ArtifactCoordinate::javafx(artifact_id, version);
        let descriptor = DescriptorFile::generate(&coordinate).await?;

        let outcome = self
            .store
            .install(file, &coordinate, descriptor.path())
            .await;

        if let Err(e) = descriptor.close() {
            log::warn!("{}", e);
        }

        let installed = outcome.map_err(|source| Error::Installation {
            artifact_id: artifact_id.to_string(),
            source: Box::new(source),
        })?;

        log::info!("Installed {} to {}", coordinate, installed.display());
        Ok(installed)
    }

    /// Locates the JavaFX runtime under `java_home` and installs both jars.
    pub async fn install_runtime(&self, java_home: &JavaHome) -> Result<InstalledRuntime> {
        let properties = java_home.locate(PROPERTIES_FILE)?;
        let runtime_jar = java_home.locate(RUNTIME_JAR)?;
        let ant_jar = java_home.locate(ANT_JAR)?;

        let version = runtime::read_version(&properties).await?;
        log::info!(
            "Will install JavaFX {} artifacts to the local repository.",
            version
        );

        let mut artifacts = Vec::with_capacity(2);
        for (artifact_id, file) in [
            (RUNTIME_ARTIFACT_ID, &runtime_jar),
            (ANT_ARTIFACT_ID, &ant_jar),
        ] {
            let installed = self.install(artifact_id, &version, file).await?;
            artifacts.push((ArtifactCoordinate::javafx(artifact_id, &version), installed));
        }

        Ok(InstalledRuntime { version, artifacts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records calls and fails on a chosen artifact id.
    #[derive(Default)]
    struct StubStore {
        fail_on: Option<&'static str>,
        calls: Mutex<Vec<(String, PathBuf, bool)>>,
    }

    impl ArtifactStore for StubStore {
        async fn install(
            &self,
            file: &Path,
            coordinate: &ArtifactCoordinate,
            descriptor: &Path,
        ) -> Result<PathBuf> {
            self.calls.lock().unwrap().push((
                coordinate.artifact_id.clone(),
                descriptor.to_path_buf(),
                descriptor.exists(),
            ));
            if self.fail_on == Some(coordinate.artifact_id.as_str()) {
                return Err(Error::GenericError("store rejected artifact".into()));
            }
            Ok(file.to_path_buf())
        }
    }

    fn fake_jdk(root: &Path, version: Option<&str>) -> JavaHome {
        let lib = root.join("jre/lib");
        std::fs::create_dir_all(&lib).unwrap();
        std::fs::write(lib.join(RUNTIME_JAR), b"rt").unwrap();
        std::fs::write(lib.join(ANT_JAR), b"ant").unwrap();
        let props = match version {
            Some(v) => format!("javafx.runtime.version={v}\n"),
            None => "javafx.runtime.build=b05\n".to_string(),
        };
        std::fs::write(lib.join(PROPERTIES_FILE), props).unwrap();
        JavaHome::new(root).unwrap()
    }

    #[tokio::test]
    async fn descriptor_removed_after_success() {
        let store = StubStore::default();
        let tmp = tempfile::tempdir().unwrap();
        let jar = tmp.path().join("x.jar");
        std::fs::write(&jar, b"x").unwrap();

        ArtifactInstaller::new(&store)
            .install("jfxrt", "2.2.3", &jar)
            .await
            .unwrap();

        let calls = store.calls.lock().unwrap();
        let (_, descriptor, existed) = &calls[0];
        assert!(existed);
        assert!(!descriptor.exists());
    }

    #[tokio::test]
    async fn descriptor_removed_after_failure() {
        let store = StubStore {
            fail_on: Some("jfxrt"),
            ..Default::default()
        };
        let tmp = tempfile::tempdir().unwrap();
        let jar = tmp.path().join("x.jar");
        std::fs::write(&jar, b"x").unwrap();

        let err = ArtifactInstaller::new(&store)
            .install("jfxrt", "2.2.3", &jar)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Installation { ref artifact_id, .. } if artifact_id == "jfxrt"));
        let calls = store.calls.lock().unwrap();
        let (_, descriptor, existed) = &calls[0];
        assert!(existed);
        assert!(!descriptor.exists());
    }

    #[tokio::test]
    async fn runtime_installs_both_jars_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let home = fake_jdk(tmp.path(), Some("2.2.3"));
        let store = StubStore::default();

        let installed = ArtifactInstaller::new(&store)
            .install_runtime(&home)
            .await
            .unwrap();

        assert_eq!(installed.version, "2.2.3");
        let ids: Vec<_> = store
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _, _)| id.clone())
            .collect();
        assert_eq!(ids, ["jfxrt", "ant-javafx"]);
        assert!(installed.dependency_declaration().contains("jfxrt"));
    }

    #[tokio::test]
    async fn failed_runtime_install_skips_tooling_jar() {
        let tmp = tempfile::tempdir().unwrap();
        let home = fake_jdk(tmp.path(), Some("2.2.3"));
        let store = StubStore {
            fail_on: Some("jfxrt"),
            ..Default::default()
        };

        let err = ArtifactInstaller::new(&store)
            .install_runtime(&home)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Installation { .. }));
        assert_eq!(store.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_version_installs_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let home = fake_jdk(tmp.path(), None);
        let store = StubStore::default();

        let err = ArtifactInstaller::new(&store)
            .install_runtime(&home)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingVersionKey { .. }));
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn local_repository_end_to_end_is_repeatable() {
        let tmp = tempfile::tempdir().unwrap();
        let home = fake_jdk(&tmp.path().join("jdk"), Some("2.2.3"));
        let repo = LocalRepository::new(tmp.path().join("repo"));
        let installer = ArtifactInstaller::new(&repo);

        let first = installer.install_runtime(&home).await.unwrap();
        let second = installer.install_runtime(&home).await.unwrap();

        assert_eq!(
            first.artifacts.iter().map(|(_, p)| p.clone()).collect::<Vec<_>>(),
            second.artifacts.iter().map(|(_, p)| p.clone()).collect::<Vec<_>>()
        );
        assert_eq!(std::fs::read(&second.artifacts[0].1).unwrap(), b"rt");
    }
}
