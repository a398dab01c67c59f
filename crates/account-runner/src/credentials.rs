//! Session token loading
//!
//! Tokens live in a line-delimited text file, one opaque session token
//! per line. The file is re-read at the start of every daily pass, so
//! tokens can be rotated without restarting the process.

use std::path::Path;

use tracing::{error, info};

use common::Secret;

/// Load session tokens from a line-delimited file.
///
/// Lines are trimmed and blank lines dropped; order is preserved and
/// duplicates are kept. An unreadable file logs the error and yields an
/// empty list — the scheduler treats an empty list as fatal.
pub async fn load_tokens(path: &Path) -> Vec<Secret> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read token file");
            return Vec::new();
        }
    };

    let tokens: Vec<Secret> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Secret::new)
        .collect();

    info!(path = %path.display(), tokens = tokens.len(), "loaded session tokens");
    tokens
}
