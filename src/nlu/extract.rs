//! Field extraction for the add and get paths.
//!
//! The model answers with raw strings; everything here is normalized
//! before it leaves the module, so the rest of the crate only ever sees
//! citation-form subjects and trimmed dates.

use chrono::NaiveDate;
use serde::Deserialize;

use super::json::ask_for_json;
use super::normalize::{normalize_date, normalize_subject};
use super::prompts::{build_homework_prompt, build_query_prompt};
use crate::gemini::ModelGateway;
use crate::store::HomeworkRecord;

/// Lookup filters for the get path. An empty string means the utterance
/// did not constrain that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkQuery {
    pub subject: String,
    pub date: String,
}

// Wire shapes the prompts ask for. Missing fields default to empty so a
// partial answer still deserializes.

#[derive(Debug, Deserialize)]
struct HomeworkAnswer {
    #[serde(default)]
    subject: String,
    #[serde(default)]
    task: String,
    #[serde(default)]
    date: String,
}

#[derive(Debug, Deserialize)]
struct QueryAnswer {
    #[serde(default)]
    subject: String,
    #[serde(default)]
    date: String,
}

/// Extract a homework record from an add utterance. `None` when the
/// model gave no usable answer, or when every field came back empty
/// after normalization (the text held nothing recognizable).
pub async fn extract_homework(
    gateway: &dyn ModelGateway,
    text: &str,
    today: NaiveDate,
) -> Option<HomeworkRecord> {
    let prompt = build_homework_prompt(text, today);
    let answer: HomeworkAnswer = ask_for_json(gateway, &prompt).await?;

    let record = HomeworkRecord {
        subject: normalize_subject(&answer.subject),
        task: answer.task.trim().to_string(),
        date: normalize_date(&answer.date),
    };
    if record.subject.is_empty() && record.task.is_empty() && record.date.is_empty() {
        log::debug!("no homework fields recognized in: {}", text);
        return None;
    }
    Some(record)
}

/// Extract lookup filters from a get utterance. `None` only when the
/// model gave no usable answer; an all-empty query is a valid
/// unconstrained fetch.
pub async fn extract_query(
    gateway: &dyn ModelGateway,
    text: &str,
    today: NaiveDate,
) -> Option<HomeworkQuery> {
    let prompt = build_query_prompt(text, today);
    let answer: QueryAnswer = ask_for_json(gateway, &prompt).await?;

    Some(HomeworkQuery {
        subject: normalize_subject(&answer.subject),
        date: normalize_date(&answer.date),
    })
}
