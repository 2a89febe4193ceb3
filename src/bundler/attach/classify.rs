//! Classification of native engine outputs.
//!
//! The engine signals what it produced only through file shapes: installers
//! are plain files named by extension, macOS application images are
//! directories ending in `.app`. Everything else is unknown.

use std::path::Path;

/// Suffix of macOS application bundle directories.
pub const MAC_APP_SUFFIX: &str = ".app";

/// What a bundle output is, and so how it gets attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleKind {
    /// Single-file installer; the extension is both type and classifier
    Installer {
        /// Extension as written, without the dot
        extension: String,
    },
    /// macOS application directory, attached as a zip
    MacApp,
    /// Shape this tool does not know how to attach
    Unknown,
}

/// Classifies an entry of the `bundles` directory.
///
/// `is_dir` is passed in rather than read from disk so the rules stay a pure
/// function of the entry's shape.
pub fn classify(path: &Path, is_dir: bool) -> BundleKind {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return BundleKind::Unknown;
    };

    if is_dir {
        return if name.len() > MAC_APP_SUFFIX.len() && name.ends_with(MAC_APP_SUFFIX) {
            BundleKind::MacApp
        } else {
            BundleKind::Unknown
        };
    }

    match path.extension() {
        Some(ext) if !ext.is_empty() => BundleKind::Installer {
            extension: ext.to_string_lossy().into_owned(),
        },
        _ => BundleKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installer(ext: &str) -> BundleKind {
        BundleKind::Installer {
            extension: ext.into(),
        }
    }

    #[test]
    fn files_classify_by_extension() {
        assert_eq!(classify(Path::new("b/app-1.0.exe"), false), installer("exe"));
        assert_eq!(classify(Path::new("b/app-1.0.msi"), false), installer("msi"));
        assert_eq!(classify(Path::new("b/App.DMG"), false), installer("DMG"));
        assert_eq!(classify(Path::new("b/app_1.0-1_amd64.deb"), false), installer("deb"));
    }

    #[test]
    fn app_directories_are_mac_apps() {
        assert_eq!(classify(Path::new("b/MyApp.app"), true), BundleKind::MacApp);
    }

    #[test]
    fn other_shapes_are_unknown() {
        assert_eq!(classify(Path::new("b/weird.bundle"), true), BundleKind::Unknown);
        assert_eq!(classify(Path::new("b/hello"), true), BundleKind::Unknown);
        assert_eq!(classify(Path::new("b/.app"), true), BundleKind::Unknown);
        assert_eq!(classify(Path::new("b/README"), false), BundleKind::Unknown);
    }

    #[test]
    fn app_suffix_on_a_file_is_an_installer_extension() {
        assert_eq!(classify(Path::new("b/odd.app"), false), installer("app"));
    }
}
