//! Temporary package descriptor backing an install.

use super::ArtifactCoordinate;
use crate::bundler::error::{Context, ErrorExt, Result};
use serde::Serialize;
use std::path::Path;
use tempfile::NamedTempFile;

/// Minimal POM model: just enough to identify the installed jar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PomModel<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    model_version: &'static str,
    group_id: &'a str,
    artifact_id: &'a str,
    version: &'a str,
    packaging: &'a str,
    description: &'static str,
}

/// Renders the descriptor document for `coordinate`.
pub fn render(coordinate: &ArtifactCoordinate) -> Result<String> {
    let model = PomModel {
        xmlns: "http://maven.apache.org/POM/4.0.0",
        model_version: "4.0.0",
        group_id: &coordinate.group_id,
        artifact_id: &coordinate.artifact_id,
        version: &coordinate.version,
        packaging: &coordinate.packaging,
        description: "POM was created from jfx-bundler",
    };
    let body = quick_xml::se::to_string_with_root("project", &model)
        .context("serializing descriptor")?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}\n"))
}

/// Descriptor written to a temporary file for the duration of one install.
///
/// Dropping it removes the file; [`DescriptorFile::close`] does the same but
/// reports failures.
#[derive(Debug)]
pub struct DescriptorFile {
    file: NamedTempFile,
}

impl DescriptorFile {
    /// Writes a descriptor for `coordinate` to a fresh temporary file.
    pub async fn generate(coordinate: &ArtifactCoordinate) -> Result<Self> {
        let xml = render(coordinate)?;
        let file = tempfile::Builder::new()
            .prefix("jfxinstall")
            .suffix(".pom")
            .tempfile()
            .fs_context("creating temporary descriptor", std::env::temp_dir())?;
        tokio::fs::write(file.path(), xml)
            .await
            .fs_context("writing temporary descriptor", file.path())?;
        Ok(Self { file })
    }

    /// Location of the descriptor.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the descriptor.
    pub fn close(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .fs_context("deleting temporary descriptor", path)
    }
}
