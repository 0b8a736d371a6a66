//! Error types for funceble-helpers

use std::path::PathBuf;

/// Result type for funceble-helpers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in funceble-helpers operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No such file or directory: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid path {path}: {message}")]
    PathInvalid { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("Failed to launch `{command}`: {source}")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    /// Wrap an I/O error, surfacing a missing path as [`Error::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
