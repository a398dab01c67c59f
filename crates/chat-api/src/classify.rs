//! Rate-limit detection for chat error responses
//!
//! The service signals per-account rate limiting with one specific
//! detail string in the error body. Only that exact marker ends an
//! account run; every other error is logged and skipped.

/// Error detail the service returns when an account is rate limited.
pub const RATE_LIMIT_DETAIL: &str = "429: rate_limit_exceeded";

/// Check an error body for the rate-limit marker.
///
/// The body must be JSON with a string `detail` field equal to the
/// marker exactly. Anything else (different detail, non-string detail,
/// non-JSON body) is an ordinary failure.
pub fn is_rate_limited(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(|detail| detail == RATE_LIMIT_DETAIL)
        })
        .unwrap_or(false)
}
