//! Dependency staging.

use crate::bundler::{
    error::{Error, Result},
    settings::ResolvedDependency,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Copies every dependency into `staging` as `<groupId>-<fileName>`.
///
/// The directory is recreated first so files from earlier runs do not leak
/// into the bundles. Returns the staged paths in input order.
///
/// # Errors
///
/// [`Error::DependencyStaging`] naming the dependency that failed to copy.
pub async fn stage_dependencies(
    dependencies: &[ResolvedDependency],
    staging: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(staging, true).await?;

    let mut staged = Vec::with_capacity(dependencies.len());
    for dependency in dependencies {
        let Some(name) = dependency.staged_file_name() else {
            log::warn!(
                "Skipping dependency without a file name: {}",
                dependency.file.display()
            );
            continue;
        };
        let target = staging.join(name);

        log::debug!(
            "Staging {} as {}",
            dependency.file.display(),
            target.display()
        );
        tokio::fs::copy(&dependency.file, &target)
            .await
            .map_err(|source| Error::DependencyStaging {
                path: dependency.file.clone(),
                source,
            })?;
        staged.push(target);
    }

    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_named_files_from_different_groups_do_not_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a/util-1.0.jar");
        let b = tmp.path().join("b/util-1.0.jar");
        std::fs::create_dir_all(a.parent().unwrap()).unwrap();
        std::fs::create_dir_all(b.parent().unwrap()).unwrap();
        std::fs::write(&a, b"alpha").unwrap();
        std::fs::write(&b, b"beta").unwrap();
        let staging = tmp.path().join("dependencies");

        let staged = stage_dependencies(
            &[
                ResolvedDependency::new("org.alpha", &a),
                ResolvedDependency::new("org.beta", &b),
            ],
            &staging,
        )
        .await
        .unwrap();

        assert_eq!(
            staged,
            [
                staging.join("org.alpha-util-1.0.jar"),
                staging.join("org.beta-util-1.0.jar"),
            ]
        );
        assert_eq!(std::fs::read(&staged[0]).unwrap(), b"alpha");
        assert_eq!(std::fs::read(&staged[1]).unwrap(), b"beta");
    }

    #[tokio::test]
    async fn stale_files_are_removed() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = tmp.path().join("dependencies");
        std::fs::create_dir_all(&staging).unwrap();
        std::fs::write(staging.join("old.jar"), b"").unwrap();

        let staged = stage_dependencies(&[], &staging).await.unwrap();

        assert!(staged.is_empty());
        assert!(staging.exists());
        assert!(!staging.join("old.jar").exists());
    }

    #[tokio::test]
    async fn missing_dependency_is_staging_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = stage_dependencies(
            &[ResolvedDependency::new("org.gone", tmp.path().join("gone.jar"))],
            &tmp.path().join("dependencies"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::DependencyStaging { .. }));
        assert!(err.to_string().contains("gone.jar"));
    }
}
