//! Error types for chat service operations

/// Errors from chat service operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid response payload: {0}")]
    Decode(String),

    #[error("invalid session token: {0}")]
    InvalidToken(String),
}

/// Result alias for chat service operations.
pub type Result<T> = std::result::Result<T, Error>;
