//! Prompt builders for classification and extraction.
//!
//! The model is asked to answer in JSON only; the extraction prompts
//! carry the current date so that relative words ("завтра", "в пятницу")
//! resolve to a concrete `DD.MM.YYYY`.

use chrono::NaiveDate;

use crate::util::date_anchor;

/// Classification: map the utterance onto "add" or "get".
pub fn build_intent_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(256 + text.len());
    prompt.push_str(
        "Определи тип запроса: \"add\" (добавление задания) или \"get\" (получение заданий).\n",
    );
    prompt.push_str("Ответ дай только в JSON:\n");
    prompt.push_str("{\"intent\": \"\"}\n\n");
    prompt.push_str("Текст: ");
    prompt.push_str(text);
    prompt
}

/// Add path: pull subject, task and date out of the utterance.
pub fn build_homework_prompt(text: &str, today: NaiveDate) -> String {
    let mut prompt = String::with_capacity(768 + text.len());
    prompt.push_str("Проанализируй текст и извлеки:\n");
    prompt.push_str("1. Предмет (subject)\n");
    prompt.push_str("2. Задание (task)\n");
    prompt.push_str("3. Дату в формате DD.MM.YYYY (date)\n\n");
    prompt.push_str(
        "Если дата указана словами (например, 'завтра'), вычисли актуальную дату. Текущая дата: ",
    );
    prompt.push_str(&date_anchor(today));
    prompt.push('\n');
    prompt.push_str(
        "Слова вроде 'задание', 'задача', 'урок' не являются названием предмета; если предмет не назван, оставь subject пустым.\n",
    );
    prompt.push_str("Ответ должен быть только в формате JSON:\n");
    prompt.push_str("{\"subject\": \"\", \"task\": \"\", \"date\": \"\"}\n\n");
    prompt.push_str("Текст: ");
    prompt.push_str(text);
    prompt
}

/// Get path: pull the subject and date filters out of the utterance.
pub fn build_query_prompt(text: &str, today: NaiveDate) -> String {
    let mut prompt = String::with_capacity(640 + text.len());
    prompt.push_str("Проанализируй запрос и извлеки:\n");
    prompt.push_str("1. Предмет (subject)\n");
    prompt.push_str("2. Дату в формате DD.MM.YYYY (date)\n\n");
    prompt.push_str(
        "Если дата указана словами (например, 'завтра'), вычисли актуальную дату. Текущая дата: ",
    );
    prompt.push_str(&date_anchor(today));
    prompt.push('\n');
    prompt.push_str(
        "Слова вроде 'задание', 'задача', 'урок' не являются названием предмета; если предмет не назван, оставь subject пустым.\n",
    );
    prompt.push_str("Ответ должен быть только в формате JSON:\n");
    prompt.push_str("{\"subject\": \"\", \"date\": \"\"}\n\n");
    prompt.push_str("Текст: ");
    prompt.push_str(text);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    #[test]
    fn test_intent_prompt_names_both_intents() {
        let prompt = build_intent_prompt("Что задали на завтра?");
        assert!(prompt.contains("\"add\""));
        assert!(prompt.contains("\"get\""));
        assert!(prompt.contains("{\"intent\": \"\"}"));
        assert!(prompt.ends_with("Текст: Что задали на завтра?"));
    }

    #[test]
    fn test_homework_prompt_carries_anchor_and_template() {
        let prompt = build_homework_prompt("По математике задали упр. 10", today());
        assert!(prompt.contains("Текущая дата: Tuesday, 04.03.2025"));
        assert!(prompt.contains("{\"subject\": \"\", \"task\": \"\", \"date\": \"\"}"));
        assert!(prompt.contains("По математике задали упр. 10"));
    }

    #[test]
    fn test_query_prompt_asks_for_two_fields_only() {
        let prompt = build_query_prompt("Что задали по химии?", today());
        assert!(prompt.contains("{\"subject\": \"\", \"date\": \"\"}"));
        assert!(!prompt.contains("\"task\""));
        assert!(prompt.contains("Текущая дата: Tuesday, 04.03.2025"));
    }

    #[test]
    fn test_extraction_prompts_warn_about_generic_words() {
        let homework = build_homework_prompt("запиши дз", today());
        let query = build_query_prompt("что задали", today());
        for prompt in [homework, query] {
            assert!(prompt.contains("не являются названием предмета"));
        }
    }
}
