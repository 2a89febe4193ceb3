//! Packaging tool discovery.
//!
//! JDK 7 ships the tool as `javafxpackager`, JDK 8 as `javapackager`. Both
//! accept the same `-createjar` and `-deploy` commands.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Tool names, preferred first.
pub const TOOL_NAMES: [&str; 2] = ["javapackager", "javafxpackager"];

fn executable(name: &str) -> String {
    if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    }
}

/// Finds the packaging tool.
///
/// Looks in `<java_home>/bin` and `<java_home>/../bin` first (JAVA_HOME may be
/// the runtime inside a development kit), then on `PATH`.
pub fn find_packager(java_home: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = java_home {
        for bin in [home.join("bin"), home.join("..").join("bin")] {
            for name in TOOL_NAMES {
                let candidate = bin.join(executable(name));
                if candidate.is_file() {
                    log::debug!("Found {} at {}", name, candidate.display());
                    return Ok(candidate);
                }
            }
        }
    }

    for name in TOOL_NAMES {
        match which::which(name) {
            Ok(path) => {
                log::debug!("Found {} on PATH at {}", name, path.display());
                return Ok(path);
            }
            Err(e) => log::debug!("{} not found in PATH: {}", name, e),
        }
    }

    Err(Error::GenericError(format!(
        "No JavaFX packaging tool found (looked for {}). Is your JAVA_HOME set to a JDK with JavaFX installed?",
        TOOL_NAMES.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_tool_in_java_home_bin() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let tool = bin.join(executable("javafxpackager"));
        std::fs::write(&tool, b"").unwrap();

        assert_eq!(find_packager(Some(tmp.path())).unwrap(), tool);
    }

    #[test]
    fn prefers_javapackager() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(executable("javafxpackager")), b"").unwrap();
        std::fs::write(bin.join(executable("javapackager")), b"").unwrap();

        assert_eq!(
            find_packager(Some(tmp.path())).unwrap(),
            bin.join(executable("javapackager"))
        );
    }

    #[test]
    fn finds_tool_next_to_nested_runtime() {
        let tmp = tempfile::tempdir().unwrap();
        let jre = tmp.path().join("jre");
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&jre).unwrap();
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(executable("javapackager")), b"").unwrap();

        let found = find_packager(Some(&jre)).unwrap();
        assert!(found.ends_with(executable("javapackager")));
    }
}
