//! Telegram Client - Bot API over HTTPS.
//!
//! Implements `MessageSender` with `sendMessage` and exposes `getUpdates`
//! for the poller. The token is part of every request URL, so request
//! errors are logged without their URL.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{ApiResponse, GetUpdatesRequest, KeyboardMarkup, SendMessageRequest, Update};
use crate::config::TelegramConfig;
use crate::domain::conversation::OutboundMessage;
use crate::domain::foundation::ChatId;
use crate::ports::{MessageSender, TransportError};

/// Slack on top of the long-poll timeout before the HTTP request gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

const ALLOWED_UPDATES: &[&str] = &["message"];

/// Bot API client.
pub struct TelegramClient {
    api_url: String,
    token: Secret<String>,
    poll_timeout: Duration,
    client: Client,
}

impl TelegramClient {
    /// Creates a client from configuration.
    ///
    /// A missing token becomes an empty one; configuration validation rejects
    /// that before any client is built.
    pub fn new(config: &TelegramConfig) -> Self {
        let poll_timeout = config.poll_timeout();
        let client = Client::builder()
            .timeout(poll_timeout + POLL_GRACE)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config
                .bot_token
                .clone()
                .unwrap_or_else(|| Secret::new(String::new())),
            poll_timeout,
            client,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token.expose_secret(), method)
    }

    /// Long-polls for updates after `offset`.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: ALLOWED_UPDATES,
        };
        let updates: Option<Vec<Update>> = self.call("getUpdates", &request).await?;
        Ok(updates.unwrap_or_default())
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<Option<T>, TransportError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::network(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(TransportError::Unauthorized);
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::network(e.without_url().to_string()))?;

        parse_api_response(status.as_u16(), &text)
    }
}

/// Unwraps the `{ok, result}` envelope.
fn parse_api_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, TransportError> {
    let parsed: ApiResponse<T> = serde_json::from_str(body).map_err(|e| {
        if (200..300).contains(&status) {
            TransportError::Parse(e.to_string())
        } else {
            TransportError::Api {
                code: status,
                description: body.chars().take(200).collect(),
            }
        }
    })?;

    if parsed.ok {
        return Ok(parsed.result);
    }

    let code = parsed.error_code.unwrap_or(status);
    if code == 401 {
        return Err(TransportError::Unauthorized);
    }
    Err(TransportError::Api {
        code,
        description: parsed.description.unwrap_or_default(),
    })
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> Result<(), TransportError> {
        let request = SendMessageRequest {
            chat_id,
            text: &message.text,
            reply_markup: KeyboardMarkup::from_directive(message.markup),
        };
        let _: Option<serde_json::Value> = self.call("sendMessage", &request).await?;
        tracing::debug!(chat_id = %chat_id, "Message sent");
        Ok(())
    }
}
