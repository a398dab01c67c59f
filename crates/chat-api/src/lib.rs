//! Client library for the remote chat service
//!
//! Provides the per-token HTTP client and typed payloads for the chat
//! service's reward-points API. This crate is a standalone library with
//! no dependency on the cycler binary — it can be tested and used
//! independently.
//!
//! Request flow per account:
//! 1. [`ApiClient::new`] bakes the session token into default headers
//! 2. [`ApiClient::check_points`] reads the reward balance
//! 3. [`ApiClient::list_threads`] / [`ApiClient::create_thread`] acquire
//!    a conversation thread
//! 4. [`ApiClient::send_message`] posts one prompt and classifies the
//!    outcome (sent vs rate limited)

pub mod classify;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

pub use classify::{RATE_LIMIT_DETAIL, is_rate_limited};
pub use client::ApiClient;
pub use constants::*;
pub use error::{Error, Result};
pub use types::{ChatMessage, PointsBalance, SendOutcome, Thread};
