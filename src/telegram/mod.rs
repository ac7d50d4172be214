//! Telegram Bot API transport: wire types, HTTP client, long-poll loop.
//!
//! Hand-built over reqwest; the bot only needs `getUpdates` and
//! `sendMessage`, which does not justify a framework crate.

pub mod client;
pub mod poller;

pub use client::TelegramClient;
pub use poller::run_poller;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Telegram API: {0}")]
    Api(String),
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_deserialization() {
        let json = r#"{
            "ok": true,
            "result": [
                {
                    "update_id": 731841935,
                    "message": {
                        "message_id": 17,
                        "from": {"id": 1234, "is_bot": false, "first_name": "Оля"},
                        "chat": {"id": 1234, "first_name": "Оля", "type": "private"},
                        "date": 1741108200,
                        "text": "Что задали на завтра?"
                    }
                }
            ]
        }"#;

        let resp: ApiResponse<Vec<Update>> = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        let updates = resp.result.unwrap();
        assert_eq!(updates[0].update_id, 731841935);

        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, 1234);
        assert_eq!(message.text.as_deref(), Some("Что задали на завтра?"));
    }

    #[test]
    fn test_non_text_update_deserializes_without_text() {
        let json = r#"{
            "update_id": 731841936,
            "message": {
                "message_id": 18,
                "chat": {"id": 1234, "type": "private"},
                "date": 1741108201,
                "sticker": {"file_id": "abc"}
            }
        }"#;

        let update: Update = serde_json::from_str(json).unwrap();
        assert!(update.message.unwrap().text.is_none());
    }

    #[test]
    fn test_error_envelope_deserialization() {
        let json = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
        let resp: ApiResponse<Vec<Update>> = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
        assert!(resp.result.is_none());
    }
}
