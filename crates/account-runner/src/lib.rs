//! Per-account run lifecycle
//!
//! Everything between "here is a session token" and "this account is
//! done for today": loading the token file, the fixed prompt catalog,
//! and the run state machine that drives one account through the daily
//! message loop.
//!
//! Account lifecycle:
//! 1. The scheduler reloads tokens fresh at the start of every pass
//! 2. The runner checks the reward balance once (informational)
//! 3. The first listed thread is reused, otherwise one is created
//! 4. Each iteration re-checks points, sends one random prompt, sleeps
//! 5. A rate limit ends the run immediately and propagates to the pass
//! 6. Exhausted points or a missing thread abort the run; the next
//!    account proceeds

pub mod credentials;
pub mod prompts;
pub mod runner;

pub use credentials::load_tokens;
pub use prompts::{DEFAULT_PROMPTS, default_prompts};
pub use runner::{AbortReason, AccountRunner, RunOutcome};
