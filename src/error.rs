use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the beatmatch-encoder library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// A BPM capture that could not be turned into a usable tempo.
    #[error("Invalid BPM value '{value}' in filename '{file_name}'")]
    InvalidBpm {
        /// Name of the offending file
        file_name: String,
        /// The captured text
        value: String,
    },

    /// Rename target is already taken.
    #[error("Target '{path}' already exists")]
    TargetExists {
        /// Path that would have been overwritten
        path: PathBuf,
    },

    /// JSON serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid BPM error.
    #[must_use]
    pub fn invalid_bpm(file_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBpm {
            file_name: file_name.into(),
            value: value.into(),
        }
    }

    /// Creates a target-exists error.
    #[must_use]
    pub fn target_exists(path: impl Into<PathBuf>) -> Self {
        Self::TargetExists { path: path.into() }
    }

    /// Returns true if this is an IO error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if the rename target was already taken.
    #[must_use]
    pub const fn is_target_exists(&self) -> bool {
        matches!(self, Self::TargetExists { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test message");
        assert!(err.is_config());
        assert!(err.to_string().contains("test message"));
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io("/tmp/track - 128.mp3", io_err);
        assert!(err.is_io());
        assert!(err.to_string().contains("/tmp/track - 128.mp3"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_invalid_bpm_error() {
        let err = Error::invalid_bpm("Song - 00.mp3", "00");
        assert!(err.to_string().contains("'00'"));
        assert!(err.to_string().contains("Song - 00.mp3"));
    }

    #[test]
    fn test_target_exists_error() {
        let err = Error::target_exists("/music/(+4.0) Song - 125.mp3");
        assert!(err.is_target_exists());
        assert!(!err.is_io());
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_serialization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().contains("Serialization error"));
    }
}
