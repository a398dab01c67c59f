//! Secret wrapper for session tokens

use std::fmt;
use zeroize::Zeroize;

/// Number of leading characters [`Secret::preview`] exposes.
const PREVIEW_LEN: usize = 5;

/// An opaque session token - redacted in Debug/Display/logs.
///
/// The inner string is zeroized on drop. Log lines that need to identify
/// an account use [`Secret::preview`], which exposes only the first few
/// characters; the full value is reachable only through
/// [`Secret::expose`] for header construction.
pub struct Secret(String);

impl Secret {
    /// Wrap a raw token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value (use sparingly)
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short prefix safe to print in log lines, e.g. `"eyJhb..."`.
    pub fn preview(&self) -> String {
        let prefix: String = self.0.chars().take(PREVIEW_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Clone for Secret {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
