//! Error types for the record layer.

use crate::RecordKind;

/// A record failed sanitization because a required field was empty.
///
/// Nothing is written when this is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The first offending field.
    pub field: &'static str,
    /// Message suitable for showing to the operator.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("option store failure: {0}")]
    Store(#[from] blockplus_option_store::Error),

    #[error("stored {kind} records could not be decoded: {error}")]
    Decode {
        kind: String,
        error: serde_json::Error,
    },

    #[error("{kind} records could not be encoded: {error}")]
    Encode {
        kind: String,
        error: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn decode(kind: RecordKind, error: serde_json::Error) -> Self {
        Error::Decode {
            kind: kind.label().to_string(),
            error,
        }
    }

    pub(crate) fn encode(kind: RecordKind, error: serde_json::Error) -> Self {
        Error::Encode {
            kind: kind.label().to_string(),
            error,
        }
    }
}
