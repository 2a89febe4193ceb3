//! Repackaging the project artifact into an executable jar.

use crate::bundler::{
    engine::{NativeEngine, PackagingRequest, Resource},
    error::{Error, Result},
    settings::Settings,
    utils::{archive, fs},
};
use std::path::{Path, PathBuf};

/// Unpacks the project artifact, has the engine build an executable jar from
/// it and swaps the result over the original artifact.
///
/// The artifact is unpacked rather than referenced so the metadata it carries
/// (`META-INF/maven/...`) ends up in the new jar.
///
/// Returns the path of the jar inside `javafx-create-jar`.
///
/// # Errors
///
/// - [`Error::Package`] when the engine rejects the request
/// - [`Error::ArtifactReplace`] when the swap fails
pub async fn repackage<E: NativeEngine>(engine: &E, settings: &Settings) -> Result<PathBuf> {
    let project = settings.project();
    let unpacked = project.unpacked_artifact_dir();

    log::debug!(
        "Unpacking {} into {}",
        project.artifact.display(),
        unpacked.display()
    );
    fs::create_dir_all(&unpacked, true).await?;
    archive::extract(&project.artifact, &unpacked).await?;

    let request = packaging_request(settings, &unpacked);
    log::info!("Creating executable jar {}", request.output_path().display());

    let packaged = engine
        .package_executable(&request)
        .await
        .map_err(|e| Error::Package(Box::new(e)))?;

    replace_artifact(&packaged, &project.artifact).await?;
    Ok(packaged)
}

/// Request for the executable jar, embedding `unpacked` as the only resource.
pub fn packaging_request(settings: &Settings, unpacked: &Path) -> PackagingRequest {
    let project = settings.project();
    let app = settings.application();

    PackagingRequest {
        main_class: app.main_class.clone(),
        preloader_class: app.preloader_class.clone(),
        verbose: settings.verbose(),
        output_dir: project.create_jar_dir(),
        output_file: project.packaged_jar_name(),
        resources: vec![Resource::dir(unpacked)],
    }
}

async fn replace_artifact(packaged: &Path, artifact: &Path) -> Result<()> {
    let replace_err = |source| Error::ArtifactReplace {
        path: artifact.to_path_buf(),
        source,
    };

    match tokio::fs::remove_file(artifact).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(replace_err(e)),
    }
    tokio::fs::copy(packaged, artifact)
        .await
        .map_err(replace_err)?;

    log::debug!("Replaced {} with {}", artifact.display(), packaged.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        builder::test_support::{StubEngine, project_fixture},
        settings::SettingsBuilder,
    };

    #[tokio::test]
    async fn replaces_artifact_with_packaged_jar() {
        let tmp = tempfile::tempdir().unwrap();
        let project = project_fixture(tmp.path()).await;
        let settings = SettingsBuilder::new()
            .project(project.clone())
            .main_class("org.example.Hello")
            .build()
            .unwrap();
        let engine = StubEngine::default();

        let packaged = repackage(&engine, &settings).await.unwrap();

        assert_eq!(packaged, project.create_jar_dir().join("hello-1.0-javafx.jar"));
        assert_eq!(
            std::fs::read(&project.artifact).unwrap(),
            std::fs::read(&packaged).unwrap()
        );
        assert!(
            project
                .unpacked_artifact_dir()
                .join("META-INF/maven/org.example/hello/pom.properties")
                .exists()
        );

        let requests = engine.packaging.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].preloader_class, None);
        assert_eq!(
            requests[0].resources,
            [Resource::dir(project.unpacked_artifact_dir())]
        );
    }

    #[tokio::test]
    async fn engine_failure_is_package_error_and_keeps_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let project = project_fixture(tmp.path()).await;
        let original = std::fs::read(&project.artifact).unwrap();
        let settings = SettingsBuilder::new()
            .project(project.clone())
            .main_class("org.example.Hello")
            .preloader_class(Some("org.example.Splash".into()))
            .build()
            .unwrap();
        let engine = StubEngine::failing();

        let err = repackage(&engine, &settings).await.unwrap_err();

        assert!(matches!(err, Error::Package(_)));
        assert_eq!(std::fs::read(&project.artifact).unwrap(), original);
        assert_eq!(
            engine.packaging.lock().unwrap()[0].preloader_class.as_deref(),
            Some("org.example.Splash")
        );
    }
}
