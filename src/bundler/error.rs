//! Error types for packaging and installation operations.
//!
//! Every phase-level failure has its own variant so callers can tell which step
//! aborted the run. All of them are terminal: nothing in the bundler retries.

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error;

/// Result alias used throughout the bundler.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the bundler.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// None of the known SDK layouts contain the requested file.
    #[error(
        "Unable to find JavaFX '{filename}' at '{}'. Is your JAVA_HOME set to a JDK with JavaFX installed (must be at least Java 7u9)?",
        base_dir.display()
    )]
    RuntimeFileNotFound {
        /// File that was searched for
        filename: String,
        /// Search root
        base_dir: PathBuf,
    },

    /// The runtime properties file could not be read.
    #[error("Unable to load JavaFX properties from {}: {source}", path.display())]
    PropertiesLoad {
        /// Properties file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The runtime properties file does not declare a version.
    #[error("Key '{key}' not found in {}", path.display())]
    MissingVersionKey {
        /// Properties file
        path: PathBuf,
        /// Key that was looked up
        key: String,
    },

    /// The artifact store refused an artifact.
    #[error("Unable to install {artifact_id}: {source}")]
    Installation {
        /// Artifact that failed to install
        artifact_id: String,
        /// Store failure
        #[source]
        source: Box<Error>,
    },

    /// The native engine rejected the packaging request.
    #[error("Unable to create JavaFX JAR: {0}")]
    Package(#[source] Box<Error>),

    /// The packaged jar could not be swapped over the project artifact.
    #[error("Unable to replace project artifact {}: {source}", path.display())]
    ArtifactReplace {
        /// Project artifact path
        path: PathBuf,
        /// Filesystem failure
        #[source]
        source: io::Error,
    },

    /// A dependency could not be copied into the staging directory.
    #[error("Unable to copy dependency {} for packaging: {source}", path.display())]
    DependencyStaging {
        /// Dependency file
        path: PathBuf,
        /// Filesystem failure
        #[source]
        source: io::Error,
    },

    /// The native engine failed to produce bundles.
    #[error("Unable to package JavaFX native bundle(s): {0}")]
    BundleGeneration(#[source] Box<Error>),

    /// Moving or archiving a generated output failed.
    #[error("Unable to attach JavaFX native bundle {}: {source}", path.display())]
    AttachmentIo {
        /// Output being attached
        path: PathBuf,
        /// Filesystem or archive failure
        #[source]
        source: io::Error,
    },

    /// Unknown bundle type name.
    #[error("Invalid bundle type '{0}'. Valid types: none, all, image, installer, exe, msi, rpm, deb, dmg")]
    InvalidBundleType(String),

    /// Filesystem operation failed with context.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        error: io::Error,
    },

    /// An external command could not be started.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Command name
        command: String,
        /// Spawn error
        error: io::Error,
    },

    /// An external command exceeded its configured timeout.
    #[error("{command} did not finish within {seconds}s")]
    CommandTimeout {
        /// Command name
        command: String,
        /// Timeout that elapsed
        seconds: u64,
    },

    /// Zip archive error.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Adds path context to filesystem results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error into [`Error::Fs`] with the given context and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Converts options and foreign errors into [`Error::GenericError`] with a message.
pub trait Context<T> {
    /// Attaches a message to the failure case.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
