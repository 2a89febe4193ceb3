//! JSON record of attached artifacts.

use super::{BuildContext, checksum::file_digest};
use crate::bundler::{
    error::{ErrorExt, Result},
    settings::ProjectSettings,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One attached file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub classifier: String,
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ManifestDocument {
    project: String,
    generated_at: DateTime<Utc>,
    attachments: Vec<ManifestEntry>,
}

/// [`BuildContext`] that records attachments with their size and checksum
/// and writes them to `<build>/javafx-attachments.json`.
#[derive(Debug, Clone)]
pub struct AttachmentManifest {
    project: String,
    path: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl AttachmentManifest {
    /// Empty manifest for `project`.
    pub fn new(project: &ProjectSettings) -> Self {
        Self {
            project: format!(
                "{}:{}:{}",
                project.group_id, project.artifact_id, project.version
            ),
            path: project.attachments_manifest(),
            entries: Vec::new(),
        }
    }

    /// Recorded attachments, in attach order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Where [`save`](Self::save) writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the manifest as pretty-printed JSON.
    pub async fn save(&self) -> Result<()> {
        let document = ManifestDocument {
            project: self.project.clone(),
            generated_at: Utc::now(),
            attachments: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating directory", parent)?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .fs_context("writing attachment manifest", &self.path)
    }
}

impl BuildContext for AttachmentManifest {
    async fn attach(&mut self, artifact_type: &str, classifier: &str, file: &Path) -> Result<()> {
        let (size, sha256) = file_digest(file).await?;
        log::debug!(
            "Attached {} ({}/{}, {} bytes)",
            file.display(),
            artifact_type,
            classifier,
            size
        );
        self.entries.push(ManifestEntry {
            artifact_type: artifact_type.to_string(),
            classifier: classifier.to_string(),
            path: file.to_path_buf(),
            size,
            sha256,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_writes_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let project = ProjectSettings {
            group_id: "org.example".into(),
            artifact_id: "hello".into(),
            version: "1.0".into(),
            final_name: "hello-1.0".into(),
            build_directory: tmp.path().join("target"),
            ..Default::default()
        };
        let exe = tmp.path().join("hello.exe");
        std::fs::write(&exe, b"MZ").unwrap();

        let mut manifest = AttachmentManifest::new(&project);
        manifest.attach("exe", "exe", &exe).await.unwrap();
        manifest.save().await.unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(manifest.path()).unwrap()).unwrap();
        assert_eq!(json["project"], "org.example:hello:1.0");
        assert_eq!(json["attachments"][0]["type"], "exe");
        assert_eq!(json["attachments"][0]["size"], 2);
    }

    #[tokio::test]
    async fn attaching_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let mut manifest = AttachmentManifest::new(&ProjectSettings::default());
        assert!(
            manifest
                .attach("zip", "jnlp", &tmp.path().join("missing.zip"))
                .await
                .is_err()
        );
        assert!(manifest.entries().is_empty());
    }
}
