//! Chat service wire constants
//!
//! These values are dictated by the remote API, not chosen by this
//! client. The base URL is the only one that is also configurable —
//! everything else must be sent exactly as the service expects it.

/// Default versioned API base URL
pub const DEFAULT_BASE_URL: &str = "https://api1-pp.klokapp.ai/v1";

/// Header carrying the account session token on every request
pub const SESSION_HEADER: &str = "x-session-token";

/// Fixed user-agent string sent on every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Title attached to every thread and chat payload
pub const THREAD_TITLE: &str = "New Chat";

/// Starter message submitted when creating a thread
pub const STARTER_MESSAGE: &str = "Starting new conversation";

/// Dataset identifier the thread-creation endpoint requires
pub const DATASET_ID: &str = "34a725bc-3374-4042-9c37-c2076a8e4c2b";

/// Model identifier the chat endpoint requires
pub const CHAT_MODEL: &str = "llama-3.3-70b-instruct";

/// Language tag the chat endpoint requires
pub const CHAT_LANGUAGE: &str = "english";
