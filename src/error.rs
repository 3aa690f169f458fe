//! Error types for envform.
//!
//! The hierarchy is small: the tool performs each step once
//! and aborts on the first I/O failure. There is no parse-error variant;
//! malformed `.env` lines are skipped by the parser, never reported.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for envform operations.
pub type Result<T> = std::result::Result<T, EnvformError>;

/// The main error type for envform.
#[derive(Error, Debug)]
pub enum EnvformError {
    /// The `.env` source file does not exist.
    #[error("input file not found: {path}")]
    InputNotFound {
        /// The missing file path
        path: PathBuf,
    },

    /// I/O error with path context.
    ///
    /// Covers unreadable inputs and unwritable outputs alike; the path
    /// tells the user which side failed.
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration parsing error.
    #[error("failed to parse configuration: {message}")]
    ConfigParse {
        /// Error message
        message: String,
        /// The underlying error (if any)
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Terminal prompt failure (closed stdin, broken terminal).
    #[error("prompt failed: {source}")]
    Prompt {
        /// The underlying dialoguer error
        #[source]
        source: dialoguer::Error,
    },
}

impl EnvformError {
    /// Creates an `Io` error.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a `ConfigParse` error.
    #[must_use]
    pub fn config_parse(
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConfigParse { message, source }
    }
}

impl From<dialoguer::Error> for EnvformError {
    fn from(source: dialoguer::Error) -> Self {
        Self::Prompt { source }
    }
}

impl From<serde_yaml::Error> for EnvformError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::ConfigParse {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

/// Extension trait for `Result` to add context to errors.
pub trait ResultExt<T> {
    /// Adds a file path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| EnvformError::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = EnvformError::io(
            "out/terraform.tfvars",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/terraform.tfvars"));
    }

    #[test]
    fn test_with_path_wraps_io_result() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = result.with_path(".env").unwrap_err();
        assert!(matches!(err, EnvformError::Io { .. }));
    }
}
