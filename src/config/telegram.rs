//! Telegram Bot API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;

/// Telegram transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot access token issued by BotFather
    pub bot_token: Option<Secret<String>>,

    /// Bot API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long-poll timeout passed to `getUpdates`, in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,

    /// Pause after a failed poll before trying again, in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,

    /// Idle time after which a user's worker task exits, in seconds
    #[serde(default = "default_worker_idle")]
    pub worker_idle_secs: u64,
}

impl TelegramConfig {
    /// Check if a non-empty token is configured
    pub fn has_token(&self) -> bool {
        self.bot_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn worker_idle(&self) -> Duration {
        Duration::from_secs(self.worker_idle_secs)
    }

    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_token() {
            return Err(ValidationError::MissingRequired("TELEGRAM_TOKEN"));
        }
        if !is_http_url(&self.api_url) {
            return Err(ValidationError::InvalidUrl("telegram.api_url"));
        }
        // Bot API caps long polling at 50s
        if self.poll_timeout_secs > 50 {
            return Err(ValidationError::InvalidTimeout("telegram.poll_timeout_secs"));
        }
        if self.worker_idle_secs == 0 {
            return Err(ValidationError::InvalidTimeout("telegram.worker_idle_secs"));
        }
        Ok(())
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_url: default_api_url(),
            poll_timeout_secs: default_poll_timeout(),
            retry_delay_secs: default_retry_delay(),
            worker_idle_secs: default_worker_idle(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_retry_delay() -> u64 {
    5
}

fn default_worker_idle() -> u64 {
    1800
}
