//! Error types for the option layer.

use std::io;
use std::path::PathBuf;

/// Errors raised by option store backends.
///
/// These are persistence failures only. Whether a stored document makes
/// sense as a record is decided by higher layers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid option name {name:?}: {message}")]
    InvalidName { name: String, message: String },

    #[error("store root {} is not usable: {error}", path.display())]
    RootPathInvalid { path: PathBuf, error: io::Error },

    #[error("I/O error on {}: {error}", path.display())]
    Io { path: PathBuf, error: io::Error },

    #[error("option {name:?} is not valid JSON: {error}")]
    Json {
        name: String,
        error: serde_json::Error,
    },
}
