//! Bot API HTTP client.

use serde::Serialize;

use super::{ApiResponse, TelegramError, Update};

const API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct GetUpdatesRequest {
    offset: i64,
    timeout: u64,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Thin client over the two Bot API methods the assistant uses. The
/// token is part of every request URL and must never be logged.
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
        }
    }

    /// Long-poll for updates past `offset`. Blocks server-side for up
    /// to `timeout_secs` when nothing is pending.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let body = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
        };
        let resp: ApiResponse<Vec<Update>> = self
            .http
            .post(self.method_url("getUpdates"))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        Self::unwrap_envelope(resp).map(Option::unwrap_or_default)
    }

    /// Send one text reply to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let body = SendMessageRequest { chat_id, text };
        let resp: ApiResponse<serde_json::Value> = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        Self::unwrap_envelope(resp).map(|_| ())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", API_BASE_URL, self.token, method)
    }

    fn unwrap_envelope<T>(resp: ApiResponse<T>) -> Result<Option<T>, TelegramError> {
        if resp.ok {
            Ok(resp.result)
        } else {
            Err(TelegramError::Api(
                resp.description
                    .unwrap_or_else(|| "no description".to_string()),
            ))
        }
    }
}
