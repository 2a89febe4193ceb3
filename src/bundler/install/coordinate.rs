//! Artifact coordinates in the local repository.

use std::{fmt, path::PathBuf};

/// Group every JavaFX artifact is installed under.
pub const GROUP_ID: &str = "com.sun.javafx";
/// Artifact id of the runtime library.
pub const RUNTIME_ARTIFACT_ID: &str = "jfxrt";
/// Artifact id of the tooling library.
pub const ANT_ARTIFACT_ID: &str = "ant-javafx";

/// Identifies an artifact in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// File extension / packaging type, `"jar"` for everything we install
    pub packaging: String,
    pub classifier: Option<String>,
}

impl ArtifactCoordinate {
    /// Coordinate of a JavaFX jar under [`GROUP_ID`].
    pub fn javafx(artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: GROUP_ID.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            packaging: "jar".to_string(),
            classifier: None,
        }
    }

    /// Group path portion (`com/sun/javafx`).
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// `artifactId-version[-classifier].packaging`
    pub fn filename(&self) -> String {
        match &self.classifier {
            Some(c) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, self.version, c, self.packaging
            ),
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.packaging),
        }
    }

    /// Path relative to the repository root.
    ///
    /// `<group_path>/<artifact_id>/<version>/<filename>`
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(self.group_path())
            .join(&self.artifact_id)
            .join(&self.version)
            .join(self.filename())
    }

    /// Path of the descriptor stored next to the artifact.
    pub fn descriptor_path(&self) -> PathBuf {
        PathBuf::from(self.group_path())
            .join(&self.artifact_id)
            .join(&self.version)
            .join(format!("{}-{}.pom", self.artifact_id, self.version))
    }

    /// Ready-to-paste dependency declaration for build files.
    pub fn dependency_declaration(&self) -> String {
        format!(
            "    <dependency>\n\
             \x20       <groupId>{}</groupId>\n\
             \x20       <artifactId>{}</artifactId>\n\
             \x20       <version>{}</version>\n\
             \x20       <scope>provided</scope>\n\
             \x20   </dependency>",
            self.group_id, self.artifact_id, self.version
        )
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classifier {
            Some(c) => write!(
                f,
                "{}:{}:{}:{}@{}",
                self.group_id, self.artifact_id, self.version, c, self.packaging
            ),
            None => write!(
                f,
                "{}:{}:{}@{}",
                self.group_id, self.artifact_id, self.version, self.packaging
            ),
        }
    }
}
