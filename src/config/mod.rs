//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRAYER_BOT` prefix and nested values are separated by double underscores.
//! The bare `TELEGRAM_TOKEN` variable is accepted as the bot token too.
//!
//! # Example
//!
//! ```no_run
//! use prayer_times_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Geocoding via {}", config.geocoding.base_url);
//! ```

mod error;
mod geocoding;
mod logging;
mod prayer_times;
mod telegram;

pub use error::{ConfigError, ValidationError};
pub use geocoding::GeocodingConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use prayer_times::PrayerTimesConfig;
pub use telegram::TelegramConfig;

use serde::Deserialize;

/// Environment variable the bot token can also be read from.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Root application configuration
///
/// Built once at startup and handed to adapter constructors section by
/// section. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Telegram transport (token, polling)
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Geocoding provider (Nominatim)
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Prayer timings provider (Aladhan)
    #[serde(default)]
    pub prayer_times: PrayerTimesConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Uses `TELEGRAM_TOKEN` as the default bot token when set
    /// 3. Reads environment variables with `PRAYER_BOT` prefix, which win over defaults
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRAYER_BOT__TELEGRAM__BOT_TOKEN=123:abc` -> `telegram.bot_token`
    /// - `PRAYER_BOT__PRAYER_TIMES__METHOD=3` -> `prayer_times.method = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing token is not a load error; [`AppConfig::validate`] reports it.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(token) = std::env::var(TELEGRAM_TOKEN_VAR) {
            builder = builder.set_default("telegram.bot_token", token)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("PRAYER_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telegram.validate()?;
        self.geocoding.validate()?;
        self.prayer_times.validate()?;
        Ok(())
    }
}

/// Accepts only absolute http(s) URLs.
fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
