//! Bot API wire types.
//!
//! Only the fields the bot reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::ReplyMarkup;
use crate::domain::foundation::ChatId;

/// Label of the location request button.
pub const SHARE_LOCATION_LABEL: &str = "Share Location";

/// Envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// `getUpdates` request body.
#[derive(Debug, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: &'static [&'static str],
}

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: ChatId,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<KeyboardMarkup>,
}

/// The two keyboard payloads the bot sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KeyboardMarkup {
    Keyboard {
        keyboard: Vec<Vec<KeyboardButton>>,
        one_time_keyboard: bool,
        resize_keyboard: bool,
    },
    Remove {
        remove_keyboard: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
    pub request_location: bool,
}

impl KeyboardMarkup {
    /// Single one-time "Share Location" button.
    pub fn request_location() -> Self {
        Self::Keyboard {
            keyboard: vec![vec![KeyboardButton {
                text: SHARE_LOCATION_LABEL.to_string(),
                request_location: true,
            }]],
            one_time_keyboard: true,
            resize_keyboard: true,
        }
    }

    pub fn remove() -> Self {
        Self::Remove {
            remove_keyboard: true,
        }
    }

    /// Wire payload for a domain keyboard directive.
    pub fn from_directive(markup: ReplyMarkup) -> Option<Self> {
        match markup {
            ReplyMarkup::None => None,
            ReplyMarkup::RequestLocation => Some(Self::request_location()),
            ReplyMarkup::RemoveKeyboard => Some(Self::remove()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_text_update() {
        let body = r#"{
            "ok": true,
            "result": [{
                "update_id": 10,
                "message": {
                    "message_id": 1,
                    "from": {"id": 42, "is_bot": false, "first_name": "A"},
                    "chat": {"id": 42, "type": "private"},
                    "date": 1710504000,
                    "text": "Paris, France"
                }
            }]
        }"#;

        let parsed: ApiResponse<Vec<Update>> = serde_json::from_str(body).unwrap();
        let update = &parsed.result.unwrap()[0];
        let message = update.message.as_ref().unwrap();

        assert_eq!(update.update_id, 10);
        assert_eq!(message.from.as_ref().unwrap().id, 42);
        assert_eq!(message.text.as_deref(), Some("Paris, France"));
        assert!(message.location.is_none());
    }

    #[test]
    fn parses_location_update() {
        let body = r#"{
            "update_id": 11,
            "message": {
                "message_id": 2,
                "from": {"id": 7, "is_bot": false},
                "chat": {"id": 7},
                "location": {"latitude": 40.7128, "longitude": -74.006}
            }
        }"#;

        let update: Update = serde_json::from_str(body).unwrap();
        let location = update.message.unwrap().location.unwrap();

        assert_eq!(location.latitude, 40.7128);
        assert_eq!(location.longitude, -74.006);
    }

    #[test]
    fn parses_error_envelope() {
        let body = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
        let parsed: ApiResponse<Vec<Update>> = serde_json::from_str(body).unwrap();

        assert!(!parsed.ok);
        assert_eq!(parsed.error_code, Some(401));
        assert!(parsed.result.is_none());
    }

    #[test]
    fn request_location_keyboard_shape() {
        let value = serde_json::to_value(KeyboardMarkup::request_location()).unwrap();
        assert_eq!(
            value,
            json!({
                "keyboard": [[{"text": "Share Location", "request_location": true}]],
                "one_time_keyboard": true,
                "resize_keyboard": true
            })
        );
    }

    #[test]
    fn remove_keyboard_shape() {
        let value = serde_json::to_value(KeyboardMarkup::remove()).unwrap();
        assert_eq!(value, json!({"remove_keyboard": true}));
    }

    #[test]
    fn send_request_omits_absent_markup() {
        let request = SendMessageRequest {
            chat_id: ChatId::new(42),
            text: "hi",
            reply_markup: KeyboardMarkup::from_directive(ReplyMarkup::None),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"chat_id": 42, "text": "hi"}));
    }
}
