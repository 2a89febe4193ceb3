//! JavaFX SDK file lookup.
//!
//! JAVA_HOME may point at a standalone runtime, at a development kit, or at the
//! runtime nested inside a development kit. Each layout keeps the JavaFX files
//! in a different `lib` directory relative to it.

use crate::bundler::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Runtime properties file declaring the JavaFX version.
pub const PROPERTIES_FILE: &str = "javafx.properties";
/// JavaFX runtime library.
pub const RUNTIME_JAR: &str = "jfxrt.jar";
/// JavaFX tooling library.
pub const ANT_JAR: &str = "ant-javafx.jar";

/// Candidate directories, relative to the search root, in lookup order:
/// runtime-only install, development kit, runtime nested in a development kit.
const SEARCH_DIRS: [&str; 3] = ["lib", "jre/lib", "../lib"];

/// Absolute search root for SDK files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaHome {
    root: PathBuf,
}

impl JavaHome {
    /// Resolves `path` to an absolute directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let root = path
            .absolutize()
            .fs_context("resolving java home", path)?
            .into_owned();
        Ok(Self { root })
    }

    /// Returns the search root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locates `filename` under this java home.
    pub fn locate(&self, filename: &str) -> Result<PathBuf> {
        locate(&self.root, filename)
    }
}

/// Finds `filename` under `base_dir`, trying each known SDK layout in order.
///
/// The order matters: a malformed installation may contain a stray copy in a
/// later candidate, so the first existing candidate wins.
///
/// # Errors
///
/// [`Error::RuntimeFileNotFound`] when no candidate exists.
pub fn locate(base_dir: &Path, filename: &str) -> Result<PathBuf> {
    for dir in SEARCH_DIRS {
        let candidate = base_dir.join(dir).join(filename);
        if candidate.exists() {
            log::debug!("Found {} at {}", filename, candidate.display());
            return Ok(candidate);
        }
    }

    Err(Error::RuntimeFileNotFound {
        filename: filename.to_string(),
        base_dir: base_dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn runtime_only_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("jre");
        touch(&home.join("lib/jfxrt.jar"));

        let found = locate(&home, RUNTIME_JAR).unwrap();
        assert_eq!(found, home.join("lib").join(RUNTIME_JAR));
    }

    #[test]
    fn development_kit_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("jdk");
        touch(&home.join("jre/lib/jfxrt.jar"));

        let found = locate(&home, RUNTIME_JAR).unwrap();
        assert_eq!(found, home.join("jre/lib").join(RUNTIME_JAR));
    }

    #[test]
    fn runtime_nested_in_kit_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let jdk = tmp.path().join("jdk");
        let home = jdk.join("jre");
        fs::create_dir_all(&home).unwrap();
        touch(&jdk.join("lib/ant-javafx.jar"));

        let found = locate(&home, ANT_JAR).unwrap();
        assert_eq!(found, home.join("../lib").join(ANT_JAR));
        assert!(found.exists());
    }

    #[test]
    fn runtime_layout_wins_over_later_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("jdk");
        touch(&home.join("lib/jfxrt.jar"));
        touch(&home.join("jre/lib/jfxrt.jar"));
        touch(&tmp.path().join("lib/jfxrt.jar"));

        let found = locate(&home, RUNTIME_JAR).unwrap();
        assert_eq!(found, home.join("lib").join(RUNTIME_JAR));
    }

    #[test]
    fn missing_everywhere_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = locate(tmp.path(), PROPERTIES_FILE).unwrap_err();
        match err {
            Error::RuntimeFileNotFound { filename, base_dir } => {
                assert_eq!(filename, PROPERTIES_FILE);
                assert_eq!(base_dir, tmp.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn java_home_is_absolute() {
        let home = JavaHome::new("relative/jdk").unwrap();
        assert!(home.root().is_absolute());
    }
}
