//! Error type shared by the ranker, the catalog and the page queries.
//!
//! We use `thiserror` so every variant carries its own `Display` text.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a value the operation does not understand (e.g. an unknown sort mode)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A review record is missing a required field or holds an out-of-bound value
    #[error("invalid review record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// A referenced user, author, book or review does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound { kind, id: id.into() }
    }

    pub(crate) fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
