//! Daily pass scheduling
//!
//! One pass runs every token through the account runner in file order,
//! then the scheduler sleeps the daily wait and starts over. Restarting
//! re-reads the token file; nothing is checkpointed between days, so
//! every account is retried from scratch regardless of yesterday's
//! outcome.
//!
//! Rate-limit handling is deliberately asymmetric: a rate limit on the
//! *last* token ends the pass with its own log line; a rate limit on
//! any earlier token only ends that token's run and the pass continues.

use account_runner::{AccountRunner, RunOutcome, load_tokens};
use chat_api::ApiClient;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Error;

/// How a daily pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Every token was processed.
    Completed,
    /// The last token hit the rate limit; the pass still counts as the
    /// day's run.
    RateLimitedOnLastAccount,
}

/// Runs daily passes over the token file, forever.
pub struct Scheduler {
    config: Config,
}

impl Scheduler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run passes until the process is killed. Returns only when a pass
    /// finds no credentials, which is fatal.
    pub async fn run_forever(&self) -> Result<(), Error> {
        loop {
            match self.run_pass().await? {
                PassOutcome::Completed => {
                    info!("all accounts processed");
                }
                PassOutcome::RateLimitedOnLastAccount => {
                    info!("last account rate limited, pass ended early");
                }
            }

            let wait = self.config.daily_wait();
            info!(wait_secs = wait.as_secs(), "sleeping until the next daily pass");
            tokio::time::sleep(wait).await;
            info!("starting a new daily pass");
        }
    }

    /// Run one sequential pass over the token file.
    pub async fn run_pass(&self) -> Result<PassOutcome, Error> {
        let tokens = load_tokens(&self.config.accounts.token_file).await;
        if tokens.is_empty() {
            return Err(Error::NoCredentials(
                self.config.accounts.token_file.display().to_string(),
            ));
        }

        info!(tokens = tokens.len(), "starting daily pass");

        let last_index = tokens.len() - 1;
        for (index, token) in tokens.iter().enumerate() {
            info!(account = %token.preview(), index, "running account");

            let client = match ApiClient::new(&self.config.api.base_url, token) {
                Ok(client) => client,
                Err(e) => {
                    error!(
                        account = %token.preview(),
                        error = %e,
                        "client construction failed, skipping account"
                    );
                    continue;
                }
            };

            let runner = AccountRunner::new(
                client,
                self.config.runner.prompts.clone(),
                self.config.chat_interval(),
            );
            let outcome = runner.run().await;
            info!(account = %token.preview(), outcome = outcome.label(), "account finished");

            if outcome == RunOutcome::RateLimited && index == last_index {
                warn!("last account hit the rate limit, ending pass early");
                return Ok(PassOutcome::RateLimitedOnLastAccount);
            }
        }

        Ok(PassOutcome::Completed)
    }
}
