use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Emoji catalog could not be loaded: {0}")]
    CatalogLoad(String),

    #[error("Alias '{alias}' is claimed by both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not find gh. Is it installed? error: {0}")]
    GhNotFound(String),

    #[error("failed to run gh. error: {status}, stderr: {stderr}")]
    Gh { status: ExitStatus, stderr: String },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("failed to deserialize JSON")]
    UnexpectedResponse,

    #[error("failed to set status. Perhaps try another emoji")]
    StatusRejected,

    #[error("Operation canceled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, StatusError>;
