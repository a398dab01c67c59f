//! Request and response payloads for the chat service
//!
//! Response types are lenient: the service omits fields freely, so
//! numeric fields default to zero and unknown fields are ignored.
//! Request types carry exactly the shape the service expects, fixed
//! strings included.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{CHAT_LANGUAGE, CHAT_MODEL, DATASET_ID, THREAD_TITLE};

/// Reward balance snapshot for an account.
///
/// Both counts default to zero when the response omits them. The balance
/// is re-fetched before every send; it is never cached.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PointsBalance {
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub total_points: i64,
}

/// A conversation thread. Only the id matters to this client; the rest
/// of the server-side object is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    pub id: String,
}

/// Envelope for the thread listing endpoint (`{"data": [...]}`).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThreadList {
    #[serde(default)]
    pub data: Vec<Thread>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A user-role message with the given content.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Body for `POST /threads`.
///
/// The thread id is generated client-side (v4 uuid) and echoed back by
/// the service; `sources` must serialize as JSON `null` here, unlike the
/// chat payload where it is an empty array.
#[derive(Debug, Serialize)]
pub struct NewThreadRequest {
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub sources: Option<Vec<String>>,
    pub id: String,
    pub dataset_id: String,
    pub created_at: String,
}

impl NewThreadRequest {
    pub fn new(first_message: &str) -> Self {
        Self {
            title: THREAD_TITLE.into(),
            messages: vec![ChatMessage::user(first_message)],
            sources: None,
            id: Uuid::new_v4().to_string(),
            dataset_id: DATASET_ID.into(),
            created_at: now_rfc3339(),
        }
    }
}

/// Body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub id: String,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub sources: Vec<String>,
    pub model: String,
    pub created_at: String,
    pub language: String,
}

impl ChatRequest {
    pub fn new(thread_id: &str, text: &str) -> Self {
        Self {
            id: thread_id.into(),
            title: THREAD_TITLE.into(),
            messages: vec![ChatMessage::user(text)],
            sources: Vec::new(),
            model: CHAT_MODEL.into(),
            created_at: now_rfc3339(),
            language: CHAT_LANGUAGE.into(),
        }
    }
}

/// Outcome of a chat send.
///
/// Rate limiting is the only service response that changes control flow
/// upstream, so it gets its own variant instead of living inside the
/// error type. Transport and other HTTP failures stay on the `Err` arm
/// of [`crate::Result`].
#[derive(Debug)]
pub enum SendOutcome {
    /// Message accepted; carries the raw response payload.
    Sent(serde_json::Value),
    /// The account hit the service rate limit; the account run must stop.
    RateLimited,
}

/// Current time as an RFC 3339 timestamp with millisecond precision,
/// e.g. `2026-08-05T09:30:00.123Z` — the format the service expects in
/// `created_at` fields.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
