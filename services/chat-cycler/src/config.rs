//! Configuration types and loading
//!
//! Config precedence: CLI arg > CONFIG_PATH env var > default file name.
//! A missing config file falls back to built-in defaults so the binary
//! runs with nothing but a token file next to it; a file that exists but
//! fails to parse or validate is fatal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Root configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Remote chat service settings
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Credential source settings
#[derive(Debug, Deserialize)]
pub struct AccountsConfig {
    /// Line-delimited session token file, re-read every daily pass
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
        }
    }
}

/// Pacing and prompt settings
#[derive(Debug, Deserialize)]
pub struct RunnerConfig {
    /// Seconds between messages within one account run
    #[serde(default = "default_chat_interval")]
    pub chat_interval_secs: u64,
    /// Seconds between daily passes
    #[serde(default = "default_daily_wait")]
    pub daily_wait_secs: u64,
    /// Prompt catalog override; the built-in catalog is used when absent.
    /// The list length is also the per-run message cap.
    #[serde(default = "default_prompts")]
    pub prompts: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            chat_interval_secs: default_chat_interval(),
            daily_wait_secs: default_daily_wait(),
            prompts: default_prompts(),
        }
    }
}

fn default_base_url() -> String {
    chat_api::DEFAULT_BASE_URL.to_string()
}

fn default_token_file() -> PathBuf {
    PathBuf::from("token.txt")
}

fn default_chat_interval() -> u64 {
    60
}

fn default_daily_wait() -> u64 {
    24 * 60 * 60
}

fn default_prompts() -> Vec<String> {
    account_runner::default_prompts()
}

impl Config {
    /// Load configuration from a TOML file; a missing file yields the
    /// defaults. Parse and validation failures are fatal.
    pub fn load(path: &Path) -> common::Result<Self> {
        let config: Config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> common::Result<()> {
        if !self.api.base_url.starts_with("http://")
            && !self.api.base_url.starts_with("https://")
        {
            return Err(common::Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.runner.chat_interval_secs == 0 {
            return Err(common::Error::Config(
                "chat_interval_secs must be greater than 0".into(),
            ));
        }

        if self.runner.daily_wait_secs == 0 {
            return Err(common::Error::Config(
                "daily_wait_secs must be greater than 0".into(),
            ));
        }

        if self.runner.prompts.is_empty() {
            return Err(common::Error::Config("prompts must not be empty".into()));
        }
        if self.runner.prompts.iter().any(|p| p.trim().is_empty()) {
            return Err(common::Error::Config(
                "prompts must not contain blank entries".into(),
            ));
        }

        Ok(())
    }

    /// Pause between messages within one account run.
    pub fn chat_interval(&self) -> Duration {
        Duration::from_secs(self.runner.chat_interval_secs)
    }

    /// Pause between daily passes.
    pub fn daily_wait(&self) -> Duration {
        Duration::from_secs(self.runner.daily_wait_secs)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("chat-cycler.toml")
    }
}
