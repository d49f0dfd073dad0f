use blockplus_records::{RecordKind, ValidationError};

/// Why an admin action failed.
///
/// Display strings are the messages returned to the operator.
#[derive(thiserror::Error, Debug)]
pub enum AdminError {
    /// Missing capability or a bad anti-forgery token. Deliberately says
    /// nothing about the target record.
    #[error("Permission denied.")]
    PermissionDenied,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{} not found.", .kind.title())]
    NotFound { kind: RecordKind },

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("The request could not be completed.")]
    Store(#[source] blockplus_records::Error),
}

impl From<blockplus_records::Error> for AdminError {
    fn from(error: blockplus_records::Error) -> Self {
        match error {
            blockplus_records::Error::Validation(error) => AdminError::Validation(error),
            other => AdminError::Store(other),
        }
    }
}

impl From<blockplus_option_store::Error> for AdminError {
    fn from(error: blockplus_option_store::Error) -> Self {
        AdminError::Store(error.into())
    }
}
