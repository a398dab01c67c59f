//! Service-specific error types

use thiserror::Error;

/// Fatal conditions for the cycler process.
///
/// Per-account failures never surface here — they are logged and the
/// pass moves on to the next token. Only an empty credential source
/// stops the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no session tokens loaded from {0}")]
    NoCredentials(String),
}
