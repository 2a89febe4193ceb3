//! JavaFX packaging library.
//!
//! Two independent flows share the runtime discovery code:
//!
//! - **install**: locate the JavaFX runtime under JAVA_HOME, read its version
//!   and install `jfxrt.jar` and `ant-javafx.jar` into an [`ArtifactStore`]
//! - **package**: repackage the project jar as an executable jar, generate
//!   native bundles with a [`NativeEngine`] and attach the outputs to a
//!   [`BuildContext`]

pub mod attach;
pub mod builder;
pub mod engine;
pub mod error;
pub mod install;
pub mod runtime;
pub mod settings;
pub mod utils;

pub use attach::{AttachedArtifact, AttachmentManifest, BuildContext, BundleKind, attach_outputs};
pub use builder::{PackageOutcome, Packager};
pub use engine::{DeploymentRequest, JavaPackager, NativeEngine, PackagingRequest, Resource};
pub use error::{Error, Result};
pub use install::{ArtifactCoordinate, ArtifactInstaller, ArtifactStore, InstalledRuntime, LocalRepository};
pub use runtime::{JavaHome, locate, read_version};
pub use settings::{
    ApplicationSettings, BundleType, ProjectSettings, ResolvedDependency, Settings, SettingsBuilder,
};
