use thiserror::Error;

/// Failure raised while reading an invocation or building its response.
///
/// Messages are stable; callers map any of them to a server error at the transport.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing inputs from request body")]
    MissingInputs,

    #[error("Missing intent from request body")]
    MissingIntent,

    #[error("Missing arguments from request body")]
    MissingArguments,

    #[error("Missing text")]
    MissingText,

    #[error("Invalid input prompt")]
    InvalidInputPrompt,

    #[error("Invalid dialog state")]
    InvalidDialogState,

    #[error("Invalid intent")]
    InvalidIntent,

    #[error("Invalid number of no inputs")]
    InvalidNoInputs,

    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] http::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
