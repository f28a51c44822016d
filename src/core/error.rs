//! Error types for the logger

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name outside the eight canonical levels
    #[error("Log level '{level}' is not supported")]
    UnknownLevel { level: String },

    /// A file handler could not append its record
    #[error("Cannot write to '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No factory registered under the requested name
    #[error("No handler registered under '{name}'")]
    UnknownHandler { name: String },

    /// A line that does not follow the record layout
    #[error("Malformed log record: {message}")]
    MalformedRecord { message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    pub fn unknown_level(level: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            level: level.into(),
        }
    }

    /// Create a write failure for the given path
    pub fn write_failure(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::WriteFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn unknown_handler(name: impl Into<String>) -> Self {
        LoggerError::UnknownHandler { name: name.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        LoggerError::MalformedRecord {
            message: message.into(),
        }
    }
}
