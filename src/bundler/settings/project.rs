//! Project metadata and on-disk layout.

use std::path::{Path, PathBuf};

/// Directory the project artifact is unpacked into before repackaging.
pub const UNPACKED_ARTIFACT_DIR: &str = "javafx-unpacked-project-artifact";
/// Output directory of the executable jar.
pub const CREATE_JAR_DIR: &str = "javafx-create-jar";
/// Dependency staging directory.
pub const DEPENDENCIES_DIR: &str = "dependencies";
/// Output directory of the native engine.
pub const NATIVE_DIR: &str = "javafx-native";
/// Collects loose web deployment files before archiving.
pub const JNLP_DIR: &str = "javafx-jnlp";
/// File the attachment manifest is written to.
pub const ATTACHMENTS_MANIFEST: &str = "javafx-attachments.json";

/// Project metadata supplied by the host build.
///
/// # Examples
///
/// ```
/// use jfx_bundler::bundler::ProjectSettings;
///
/// let project = ProjectSettings {
///     group_id: "org.example".into(),
///     artifact_id: "hello".into(),
///     version: "1.0".into(),
///     final_name: "hello-1.0".into(),
///     artifact: "target/hello-1.0.jar".into(),
///     build_directory: "target".into(),
///     ..Default::default()
/// };
/// assert_eq!(project.packaged_jar_name(), "hello-1.0-javafx.jar");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectSettings {
    /// Project group id
    pub group_id: String,

    /// Project artifact id
    pub artifact_id: String,

    /// Project version, used as the application version
    pub version: String,

    /// Project description.
    ///
    /// Default: None
    pub description: Option<String>,

    /// Base name of produced files (e.g. `hello-1.0`)
    pub final_name: String,

    /// Path of the project's built jar
    pub artifact: PathBuf,

    /// Build output directory all staging directories live in
    pub build_directory: PathBuf,
}

impl ProjectSettings {
    /// `<build>/javafx-unpacked-project-artifact`
    pub fn unpacked_artifact_dir(&self) -> PathBuf {
        self.build_directory.join(UNPACKED_ARTIFACT_DIR)
    }

    /// `<build>/javafx-create-jar`
    pub fn create_jar_dir(&self) -> PathBuf {
        self.build_directory.join(CREATE_JAR_DIR)
    }

    /// `<finalName>-javafx.jar`
    pub fn packaged_jar_name(&self) -> String {
        format!("{}-javafx.jar", self.final_name)
    }

    /// `<build>/dependencies`
    pub fn dependencies_dir(&self) -> PathBuf {
        self.build_directory.join(DEPENDENCIES_DIR)
    }

    /// `<build>/javafx-native`
    pub fn native_dir(&self) -> PathBuf {
        self.build_directory.join(NATIVE_DIR)
    }

    /// `<build>/javafx-jnlp`
    pub fn jnlp_dir(&self) -> PathBuf {
        self.build_directory.join(JNLP_DIR)
    }

    /// `<build>/<finalName>-jnlp.zip`
    pub fn jnlp_zip(&self) -> PathBuf {
        self.build_directory
            .join(format!("{}-jnlp.zip", self.final_name))
    }

    /// `<build>/<finalName>-macosx.zip`
    pub fn macosx_zip(&self) -> PathBuf {
        self.build_directory
            .join(format!("{}-macosx.zip", self.final_name))
    }

    /// `<build>/javafx-attachments.json`
    pub fn attachments_manifest(&self) -> PathBuf {
        self.build_directory.join(ATTACHMENTS_MANIFEST)
    }

    /// Returns the build directory.
    pub fn build_directory(&self) -> &Path {
        &self.build_directory
    }
}

/// A resolved project dependency to ship next to the application jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    /// Group the dependency belongs to; prefixes the staged file name
    pub group_id: String,
    /// Resolved file on disk
    pub file: PathBuf,
}

impl ResolvedDependency {
    /// Creates a dependency entry.
    pub fn new(group_id: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            group_id: group_id.into(),
            file: file.into(),
        }
    }

    /// Name used in the staging directory: `<groupId>-<fileName>`.
    ///
    /// Returns `None` when the dependency path has no file name.
    pub fn staged_file_name(&self) -> Option<String> {
        let name = self.file.file_name()?.to_string_lossy();
        Some(format!("{}-{}", self.group_id, name))
    }
}
