//! Prayer timings provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;

/// Aladhan timings API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PrayerTimesConfig {
    /// API base URL, without the `/timings` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Calculation method id (2 = Islamic Society of North America)
    #[serde(default = "default_method")]
    pub method: u8,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PrayerTimesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate prayer times configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("prayer_times.base_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout("prayer_times.timeout_secs"));
        }
        Ok(())
    }
}

impl Default for PrayerTimesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            method: default_method(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://api.aladhan.com/v1".to_string()
}

fn default_method() -> u8 {
    2
}

fn default_timeout() -> u64 {
    10
}
