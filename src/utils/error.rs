//! Error types for `chanwire`.
//!
//! The codecs report exactly two kinds of failure: [`EncodeError`] when a
//! message cannot be written in a wire format and [`DecodeError`] when bytes
//! are not a valid frame for that format. Neither is recovered from inside
//! the crate; the caller decides whether to drop the frame or the connection.

use thiserror::Error;

/// A message could not be represented in the wire format.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The JSON encoder rejected a value in the message.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bytes could not be turned into a message.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Invalid JSON syntax, wrong shape, or a value of the wrong type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required positional slot was `null`.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors raised when looking up a serializer by version.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unsupported serializer version: {0}")]
    UnsupportedVersion(String),
}

/// Umbrella error used by the binary and by callers that mix codec,
/// registry and configuration operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} frame(s) could not be transcoded")]
    FramesRejected(usize),
}

/// Result type alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
