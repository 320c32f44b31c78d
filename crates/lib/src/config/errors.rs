//! Error types for configuration access.

use thiserror::Error;

/// Structured errors for loading and querying a [`Config`](super::Config).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key is absent (or holds an empty map or null)
    #[error("Missing configuration key: {path}")]
    MissingKey { path: String },

    /// The value at a key could not be converted to the requested type
    #[error("Configuration key '{path}' is not {expected}: {reason}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        reason: String,
    },

    /// The configuration file could not be read
    #[error("Failed to read configuration file {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON
    #[error("Failed to parse configuration {path}: {reason}")]
    ParseFailed { path: String, reason: String },

    /// The configuration file could not be written
    #[error("Failed to write configuration file {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Check if this error indicates a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::MissingKey { .. })
    }

    /// Check if this error is related to file I/O
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadFailed { .. } | ConfigError::WriteFailed { .. }
        )
    }

    /// Get the key path or file path this error refers to
    pub fn path(&self) -> &str {
        match self {
            ConfigError::MissingKey { path }
            | ConfigError::TypeMismatch { path, .. }
            | ConfigError::ReadFailed { path, .. }
            | ConfigError::ParseFailed { path, .. }
            | ConfigError::WriteFailed { path, .. } => path,
        }
    }
}

// Conversion from ConfigError to the main Error type
impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
