//! Per-utterance pipeline: classify, extract, touch the store, reply.
//!
//! One call in, one reply out. Nothing here retries and nothing here
//! keeps state between messages; the store handle is the only thing
//! utterances share.

use std::sync::Arc;

use chrono_tz::Tz;

use crate::gemini::ModelGateway;
use crate::nlu::{classify, extract_homework, extract_query, Intent};
use crate::replies;
use crate::store::HomeworkStore;
use crate::util::today_in;

/// The assistant core, wired once at startup and shared by every
/// message task.
pub struct Assistant {
    gateway: Arc<dyn ModelGateway>,
    store: HomeworkStore,
    timezone: Tz,
}

impl Assistant {
    pub fn new(gateway: Arc<dyn ModelGateway>, store: HomeworkStore, timezone: Tz) -> Self {
        Self {
            gateway,
            store,
            timezone,
        }
    }

    /// Static reply for a freshly started conversation.
    pub fn greeting(&self) -> &'static str {
        replies::GREETING
    }

    /// Run the full pipeline for one utterance and return the reply
    /// text. At most two model calls happen per utterance: the intent
    /// classification and one extraction.
    pub async fn handle_message(&self, text: &str) -> String {
        let intent = classify(self.gateway.as_ref(), text).await;
        log::debug!("intent {} for: {}", intent.label(), text);

        match intent {
            Intent::Add => self.handle_add(text).await,
            Intent::Get => self.handle_get(text).await,
            Intent::Unknown => replies::UNKNOWN_INTENT.to_string(),
        }
    }

    async fn handle_add(&self, text: &str) -> String {
        let today = today_in(self.timezone);
        match extract_homework(self.gateway.as_ref(), text, today).await {
            Some(record) => {
                log::info!("storing record for {}", display_key(&record.date));
                let reply = replies::added(&record);
                self.store.insert(record);
                reply
            }
            None => replies::ADD_FAILED.to_string(),
        }
    }

    async fn handle_get(&self, text: &str) -> String {
        let today = today_in(self.timezone);
        let query = match extract_query(self.gateway.as_ref(), text, today).await {
            Some(query) => query,
            None => return replies::QUERY_FAILED.to_string(),
        };

        // Empty extracted fields mean "no filter on that field".
        let subject = non_empty(&query.subject);
        let date = non_empty(&query.date);

        let found = self.store.lookup(subject, date, today);
        if found.is_empty() {
            replies::not_found(subject, date)
        } else {
            replies::found(&found)
        }
    }
}

fn non_empty(field: &str) -> Option<&str> {
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn display_key(date: &str) -> &str {
    if date.is_empty() {
        "(без даты)"
    } else {
        date
    }
}
