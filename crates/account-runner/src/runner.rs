//! Per-account run state machine
//!
//! One run walks through: an informational points check, thread
//! acquisition, then a bounded send loop. Terminal transitions:
//! - thread creation fails → `Aborted(ThreadUnavailable)`
//! - balance unavailable or `total_points <= 0` → `Aborted(PointsExhausted)`
//! - rate-limit outcome from a send → `RateLimited`, immediately and
//!   without the pacing sleep
//! - prompt cap reached → `Completed`
//!
//! A failed send is neither: the message is lost, the loop continues.

use std::time::Duration;

use rand::RngExt;
use tracing::{info, warn};

use chat_api::{ApiClient, STARTER_MESSAGE, SendOutcome};

/// Why a run stopped short of the prompt cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// No existing thread and thread creation failed.
    ThreadUnavailable,
    /// Balance unavailable or no points left.
    PointsExhausted,
}

/// Terminal state of one account run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The prompt cap was reached without interruption.
    Completed,
    /// The service rate-limited the account; the scheduler is told
    /// immediately.
    RateLimited,
    /// The run stopped early; the scheduler moves on to the next account.
    Aborted(AbortReason),
}

impl RunOutcome {
    /// Outcome label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::RateLimited => "rate_limited",
            RunOutcome::Aborted(AbortReason::ThreadUnavailable) => "aborted_no_thread",
            RunOutcome::Aborted(AbortReason::PointsExhausted) => "aborted_no_points",
        }
    }
}

/// Drives one account through the daily message loop.
///
/// The prompt list length is the iteration cap; prompts are picked at
/// random with replacement, so a run of N iterations does not imply N
/// distinct prompts.
pub struct AccountRunner {
    client: ApiClient,
    prompts: Vec<String>,
    chat_interval: Duration,
}

impl AccountRunner {
    pub fn new(client: ApiClient, prompts: Vec<String>, chat_interval: Duration) -> Self {
        Self {
            client,
            prompts,
            chat_interval,
        }
    }

    /// Run the account to a terminal state.
    pub async fn run(&self) -> RunOutcome {
        // Entry balance check is informational; the authoritative check
        // happens before every send.
        match self.client.check_points().await {
            Ok(balance) => info!(
                points = balance.points,
                total_points = balance.total_points,
                "points balance"
            ),
            Err(e) => warn!(error = %e, "initial points check failed"),
        }

        let mut thread_id = match self.acquire_thread().await {
            Some(id) => Some(id),
            None => {
                warn!("no thread available, aborting run");
                return RunOutcome::Aborted(AbortReason::ThreadUnavailable);
            }
        };

        for attempt in 0..self.prompts.len() {
            let id = match &thread_id {
                Some(id) => id.clone(),
                None => match self.create_thread().await {
                    Some(id) => {
                        thread_id = Some(id.clone());
                        id
                    }
                    None => return RunOutcome::Aborted(AbortReason::ThreadUnavailable),
                },
            };

            let balance = match self.client.check_points().await {
                Ok(balance) => balance,
                Err(e) => {
                    warn!(error = %e, "points check failed, aborting run");
                    return RunOutcome::Aborted(AbortReason::PointsExhausted);
                }
            };
            if balance.total_points <= 0 {
                info!("no points left, aborting run");
                return RunOutcome::Aborted(AbortReason::PointsExhausted);
            }

            let prompt = self.pick_prompt();
            match self.client.send_message(&id, prompt).await {
                Ok(SendOutcome::Sent(_)) => {
                    info!(thread_id = %id, attempt, prompt, "message sent");
                }
                Ok(SendOutcome::RateLimited) => {
                    warn!(thread_id = %id, "rate limit hit, ending run");
                    return RunOutcome::RateLimited;
                }
                // Message loss is accepted; the next iteration proceeds.
                Err(e) => warn!(error = %e, "message send failed, skipping"),
            }

            info!(
                wait_secs = self.chat_interval.as_secs(),
                "waiting before next message"
            );
            tokio::time::sleep(self.chat_interval).await;
        }

        info!("prompt cap reached, run complete");
        RunOutcome::Completed
    }

    /// Reuse the first listed thread, or create one.
    async fn acquire_thread(&self) -> Option<String> {
        let threads = match self.client.list_threads().await {
            Ok(threads) => threads,
            Err(e) => {
                warn!(error = %e, "listing threads failed");
                Vec::new()
            }
        };

        if let Some(thread) = threads.into_iter().next() {
            info!(thread_id = %thread.id, "reusing existing thread");
            return Some(thread.id);
        }
        self.create_thread().await
    }

    async fn create_thread(&self) -> Option<String> {
        match self.client.create_thread(STARTER_MESSAGE).await {
            Ok(thread) => {
                info!(thread_id = %thread.id, "created new thread");
                Some(thread.id)
            }
            Err(e) => {
                warn!(error = %e, "thread creation failed");
                None
            }
        }
    }

    fn pick_prompt(&self) -> &str {
        let index = rand::rng().random_range(0..self.prompts.len());
        &self.prompts[index]
    }
}
