//! Error type shared by the generator library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
///
/// Most of these never abort a run: the orchestrator logs per-type failures and
/// moves on. Only configuration and metadata loading are fatal to a caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading, writing or creating something on disk failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata manifest could not be parsed.
    #[error("invalid metadata manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file could not be parsed.
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration is incomplete or contradictory.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// A catalog entry no longer resolves through the metadata provider.
    #[error("type not found in metadata: {full_name}")]
    TypeNotFound { full_name: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
