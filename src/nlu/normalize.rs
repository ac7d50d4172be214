//! Subject and date normalization.
//!
//! The model returns fields as free text. Before a subject is stored or
//! matched it is cleaned (NFC, lowercase, ё→е, punctuation out), checked
//! against a stoplist of words that mean "the homework itself" rather
//! than a school subject, reduced token by token to citation form, and
//! recapitalized. Dates are trimmed and otherwise left alone.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::morph;

/// Whole-phrase stopwords. When the model extracts one of these as the
/// "subject", the utterance named no subject at all.
const SUBJECT_STOPLIST: &[&str] = &[
    "дз",
    "домашка",
    "домашнее задание",
    "домашняя работа",
    "задание",
    "задания",
    "заданий",
    "задача",
    "задачи",
    "урок",
    "уроки",
    "что",
    "что-нибудь",
];

fn punctuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s-]").unwrap())
}

/// Normalize a raw subject into its stored form: citation-form tokens,
/// single spaces, first letter uppercased. Stopworded or empty input
/// yields an empty string.
pub fn normalize_subject(raw: &str) -> String {
    let cleaned = clean(raw);
    if cleaned.is_empty() || SUBJECT_STOPLIST.contains(&cleaned.as_str()) {
        return String::new();
    }
    let citation = cleaned
        .split_whitespace()
        .map(morph::citation_form)
        .collect::<Vec<_>>()
        .join(" ");
    capitalize(&citation)
}

/// Dates pass through verbatim apart from surrounding whitespace. The
/// store keys buckets by this exact string; validation happens only where
/// ordering is needed.
pub fn normalize_date(raw: &str) -> String {
    raw.trim().to_string()
}

/// NFC, lowercase, ё→е, punctuation to spaces, whitespace collapsed.
fn clean(raw: &str) -> String {
    let lowered = raw
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .replace('ё', "е");
    let stripped = punctuation_re().replace_all(&lowered, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first letter of a phrase, leaving the rest as-is.
fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
