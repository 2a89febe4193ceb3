//! Native bundle type selection.

use crate::bundler::Error;
use std::{fmt, str::FromStr};

/// Kind of native bundle to produce.
///
/// Owned by this crate so that engine identifiers can change without touching
/// configuration. Parsing is case-insensitive; [`BundleType::native_arg`] maps
/// each variant onto the value the packaging engine expects.
///
/// # Examples
///
/// ```
/// use jfx_bundler::bundler::BundleType;
///
/// let ty: BundleType = "MSI".parse().unwrap();
/// assert_eq!(ty, BundleType::Msi);
/// assert_eq!(ty.native_arg(), Some("msi"));
/// assert_eq!(BundleType::None.native_arg(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BundleType {
    /// Executable jar and web deployment files only
    #[default]
    None,
    /// Every bundle the platform supports
    All,
    /// Self-contained application image (e.g. `MyApp.app`)
    Image,
    /// Every installer type the platform supports
    Installer,
    /// Windows EXE installer
    Exe,
    /// Windows MSI installer
    Msi,
    /// RPM package
    Rpm,
    /// Debian package
    Deb,
    /// macOS disk image
    Dmg,
}

impl BundleType {
    /// All variants, in display order.
    pub const ALL: [BundleType; 9] = [
        BundleType::None,
        BundleType::All,
        BundleType::Image,
        BundleType::Installer,
        BundleType::Exe,
        BundleType::Msi,
        BundleType::Rpm,
        BundleType::Deb,
        BundleType::Dmg,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleType::None => "none",
            BundleType::All => "all",
            BundleType::Image => "image",
            BundleType::Installer => "installer",
            BundleType::Exe => "exe",
            BundleType::Msi => "msi",
            BundleType::Rpm => "rpm",
            BundleType::Deb => "deb",
            BundleType::Dmg => "dmg",
        }
    }

    /// Value for the engine's `-native` option, or `None` when no native
    /// bundle is requested.
    pub fn native_arg(&self) -> Option<&'static str> {
        match self {
            BundleType::None => None,
            other => Some(other.as_str()),
        }
    }
}

impl FromStr for BundleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = match lower.as_str() {
            "platform-app-image" => "image",
            other => other.strip_prefix("installer-").unwrap_or(other),
        };

        BundleType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == name)
            .ok_or_else(|| Error::InvalidBundleType(s.to_string()))
    }
}

impl fmt::Display for BundleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
