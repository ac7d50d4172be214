//! Long-poll loop: pull updates, spawn one task per text message.

use std::sync::Arc;
use std::time::Duration;

use super::TelegramClient;
use crate::orchestrator::Assistant;

/// Server-side long-poll window.
const POLL_TIMEOUT_SECS: u64 = 25;

/// Backoff after a failed poll before asking again.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Run the polling loop forever. Each text message is handled on its
/// own task so a slow model call on one conversation never blocks the
/// loop; the tasks share the assistant (and through it, the store).
pub async fn run_poller(client: TelegramClient, assistant: Assistant) {
    let client = Arc::new(client);
    let assistant = Arc::new(assistant);
    let mut offset: i64 = 0;

    log::info!("Бот запущен");

    loop {
        let updates = match client.get_updates(offset, POLL_TIMEOUT_SECS).await {
            Ok(updates) => updates,
            Err(err) => {
                log::warn!("getUpdates failed: {}", err);
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);

            let message = match update.message {
                Some(message) => message,
                None => continue,
            };
            let text = match message.text {
                Some(text) => text,
                None => continue,
            };
            let chat_id = message.chat.id;

            if text.starts_with('/') {
                if text == "/start" || text.starts_with("/start ") {
                    let client = Arc::clone(&client);
                    let greeting = assistant.greeting();
                    tokio::spawn(async move {
                        if let Err(err) = client.send_message(chat_id, greeting).await {
                            log::warn!("greeting send to chat {} failed: {}", chat_id, err);
                        }
                    });
                } else {
                    log::debug!("ignoring unsupported command: {}", text);
                }
                continue;
            }

            let client = Arc::clone(&client);
            let assistant = Arc::clone(&assistant);
            tokio::spawn(async move {
                let reply = assistant.handle_message(&text).await;
                if let Err(err) = client.send_message(chat_id, &reply).await {
                    log::warn!("reply send to chat {} failed: {}", chat_id, err);
                }
            });
        }
    }
}
