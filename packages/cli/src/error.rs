use std::io;

use blockplus_records::RecordKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Records(#[from] blockplus_records::Error),

    #[error(transparent)]
    Store(#[from] blockplus_option_store::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("input must be a JSON object")]
    NotAnObject,

    #[error("no {kind} with id {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("refusing to delete every option without --yes")]
    Unconfirmed,
}
