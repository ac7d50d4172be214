//! Intent classification for incoming utterances.

use serde::Deserialize;

use super::json::ask_for_json;
use super::prompts::build_intent_prompt;
use crate::gemini::ModelGateway;

/// What an utterance asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Store a new homework record
    Add,
    /// Fetch stored records
    Get,
    /// Anything else, including answers the model mangled
    Unknown,
}

impl Intent {
    /// Map a model answer onto the closed set. Unexpected strings land
    /// on `Unknown` instead of erroring.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "add" => Self::Add,
            "get" => Self::Get,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Get => "get",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Deserialize)]
struct IntentAnswer {
    #[serde(default)]
    intent: String,
}

/// Classify one utterance. A failed model call and an answer without a
/// usable `intent` field both come back as `Unknown`.
pub async fn classify(gateway: &dyn ModelGateway, text: &str) -> Intent {
    let prompt = build_intent_prompt(text);
    match ask_for_json::<IntentAnswer>(gateway, &prompt).await {
        Some(answer) => Intent::parse(&answer.intent),
        None => Intent::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::test_utils::ScriptedGateway;

    #[test]
    fn test_parse_maps_onto_closed_set() {
        assert_eq!(Intent::parse("add"), Intent::Add);
        assert_eq!(Intent::parse("get"), Intent::Get);
        assert_eq!(Intent::parse("maybe"), Intent::Unknown);
        assert_eq!(Intent::parse(""), Intent::Unknown);
        assert_eq!(Intent::parse("ADD"), Intent::Unknown);
    }

    #[tokio::test]
    async fn test_classifies_add_and_get() {
        let gateway = ScriptedGateway::replying([
            "```json\n{\"intent\": \"add\"}\n```",
            "{\"intent\": \"get\"}",
        ]);
        assert_eq!(classify(&gateway, "задали номера 431, 432").await, Intent::Add);
        assert_eq!(classify(&gateway, "что задали?").await, Intent::Get);
    }

    #[tokio::test]
    async fn test_unexpected_answer_is_unknown() {
        let gateway = ScriptedGateway::replying(["{\"intent\": \"maybe\"}"]);
        assert_eq!(classify(&gateway, "привет").await, Intent::Unknown);
    }

    #[tokio::test]
    async fn test_missing_field_is_unknown() {
        let gateway = ScriptedGateway::replying(["{\"type\": \"add\"}"]);
        assert_eq!(classify(&gateway, "привет").await, Intent::Unknown);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_unknown() {
        let gateway = ScriptedGateway::failing();
        assert_eq!(classify(&gateway, "привет").await, Intent::Unknown);
    }
}
