//! Every string the assistant sends.
//!
//! Fixed Russian text. The not-found wording is chosen by which filters
//! the query carried, not by which lookup branch ran dry, so the same
//! question always gets the same answer.

use crate::store::HomeworkRecord;

/// Placeholder for fields the extractor left empty.
const NOT_SPECIFIED: &str = "(не указано)";

/// Greeting for a freshly started conversation.
pub const GREETING: &str = "Привет! Я бот для управления заданиями.\n\n\
    Примеры команд:\n\
    - Добавить задание: 'По математике на завтра задали номера 431, 432'\n\
    - Посмотреть задания: 'Что задали на завтра?'";

/// The add utterance did not contain a recognizable record.
pub const ADD_FAILED: &str = "❌ Не удалось распознать задание. Попробуйте другой формат.";

/// The get utterance could not be turned into filters.
pub const QUERY_FAILED: &str = "❌ Не удалось распознать запрос. Попробуйте другой формат.";

/// The classifier could not map the utterance onto add or get.
pub const UNKNOWN_INTENT: &str =
    "❌ Не удалось определить тип запроса. Попробуйте другой формат.";

/// Confirmation for a stored record. Empty fields are shown rather than
/// hidden, so the user sees what the record is missing.
pub fn added(record: &HomeworkRecord) -> String {
    format!(
        "✅ Задание добавлено:\nПредмет: {}\nДата: {}\nЗадание: {}",
        or_not_specified(&record.subject),
        or_not_specified(&record.date),
        or_not_specified(&record.task),
    )
}

/// Matched records, one block per record, blank line between blocks.
pub fn found(records: &[HomeworkRecord]) -> String {
    records
        .iter()
        .map(|r| format!("Дата: {}\nПредмет: {}\nЗадание: {}", r.date, r.subject, r.task))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Nothing matched; the wording names the filters the user gave.
pub fn not_found(subject: Option<&str>, date: Option<&str>) -> String {
    match (subject, date) {
        (Some(subject), Some(date)) => {
            format!("❌ Заданий по предмету '{subject}' на {date} не найдено.")
        }
        (Some(subject), None) => format!("❌ Заданий по предмету '{subject}' не найдено."),
        (None, Some(date)) => format!("❌ Заданий на {date} не найдено."),
        (None, None) => "❌ Не удалось найти подходящих заданий.".to_string(),
    }
}

fn or_not_specified(field: &str) -> &str {
    if field.is_empty() {
        NOT_SPECIFIED
    } else {
        field
    }
}
