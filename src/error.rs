//! Error types for the jfx-bundler binary.
//!
//! Library failures arrive as [`crate::bundler::Error`]; this layer adds
//! argument and configuration errors and hints for the user.

use crate::bundler::Error as LibError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] LibError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Bundler(LibError::RuntimeFileNotFound { .. }) => vec![
                "Point --java-home (or JAVA_HOME) at a JDK 7u9 or later that bundles JavaFX"
                    .to_string(),
            ],
            Self::Bundler(LibError::MissingVersionKey { .. }) => {
                vec!["The JavaFX installation looks incomplete; reinstall the JDK".to_string()]
            }
            Self::Bundler(LibError::CommandFailed { .. }) => vec![
                "Make sure javapackager or javafxpackager is in <java home>/bin or on PATH"
                    .to_string(),
            ],
            Self::Bundler(LibError::CommandTimeout { .. }) => {
                vec!["Raise --timeout or omit it to wait for the packager".to_string()]
            }
            Self::Toml(_) => vec!["Check the configuration file syntax and keys".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_runtime_suggests_java_home() {
        let err = BundlerError::from(LibError::RuntimeFileNotFound {
            filename: "jfxrt.jar".into(),
            base_dir: PathBuf::from("/opt/jdk"),
        });
        assert!(err.recovery_suggestions()[0].contains("JAVA_HOME"));
        assert!(err.to_string().contains("jfxrt.jar"));
    }

    #[test]
    fn config_syntax_error_points_at_configuration() {
        let err = BundlerError::from(toml::from_str::<toml::Table>("[project").unwrap_err());
        assert!(matches!(err, BundlerError::Toml(_)));
        assert!(err.recovery_suggestions()[0].contains("configuration file"));
    }

    #[test]
    fn packager_timeout_suggests_raising_limit() {
        let err = BundlerError::from(LibError::CommandTimeout {
            command: "javapackager -deploy".into(),
            seconds: 5,
        });
        assert!(err.recovery_suggestions()[0].contains("--timeout"));
    }
}
