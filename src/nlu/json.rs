//! JSON extraction from model replies.
//!
//! Every model answer crosses exactly one boundary on its way to typed
//! data: [`ask_for_json`]. A failed model call, a reply without a JSON
//! object and an object that does not deserialize all collapse to `None`
//! for the caller; the warn log is the only place the causes stay apart.

use serde::de::DeserializeOwned;

use crate::gemini::ModelGateway;

/// Locate the JSON object inside a model reply. Replies come back inside
/// markdown fences, bare, or buried in prose; all three are handled.
/// A reply whose top level is a JSON array is not an answer to any
/// prompt we send, so it yields `None`.
pub(crate) fn extract_json_slice(reply: &str) -> Option<&str> {
    // ```json fence
    if let Some(start) = reply.find("```json") {
        let body = start + 7;
        if let Some(end) = reply[body..].find("```") {
            return Some(reply[body..body + end].trim());
        }
    }
    // Generic fence: skip the info line, accept only an object body
    if let Some(start) = reply.find("```") {
        let after = start + 3;
        if let Some(nl) = reply[after..].find('\n') {
            let body = after + nl + 1;
            if let Some(end) = reply[body..].find("```") {
                let candidate = reply[body..body + end].trim();
                if candidate.starts_with('{') {
                    return Some(candidate);
                }
            }
        }
    }

    let trimmed = reply.trim();
    // Bare object
    if trimmed.starts_with('{') {
        return Some(trimmed);
    }
    // Bare array: digging an element out of it would silently answer a
    // different question than the prompt asked
    if trimmed.starts_with('[') {
        return None;
    }

    // Object buried in prose: scan to the matching close brace,
    // string-aware so quoted braces do not end the scan
    if let Some(start) = reply.find('{') {
        let candidate = &reply[start..];
        let mut depth = 0i32;
        let mut in_string = false;
        let mut escaped = false;
        for (i, ch) in candidate.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            if ch == '\\' && in_string {
                escaped = true;
                continue;
            }
            if ch == '"' {
                in_string = !in_string;
                continue;
            }
            if in_string {
                continue;
            }
            if ch == '{' {
                depth += 1;
            } else if ch == '}' {
                depth -= 1;
                if depth == 0 {
                    return Some(&candidate[..=i]);
                }
            }
        }
    }
    None
}

/// Ask the model for a JSON answer and deserialize it into `T`.
///
/// Never fails loudly: absence is the only failure signal callers see,
/// and the cause is logged here and nowhere else.
pub async fn ask_for_json<T: DeserializeOwned>(
    gateway: &dyn ModelGateway,
    prompt: &str,
) -> Option<T> {
    let reply = match gateway.generate(prompt).await {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("model call failed: {}", err);
            return None;
        }
    };
    let json = match extract_json_slice(&reply) {
        Some(json) => json,
        None => {
            log::warn!("model reply contained no JSON object: {}", log_snippet(&reply));
            return None;
        }
    };
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("model reply did not deserialize: {}", err);
            None
        }
    }
}

/// First 120 chars of a reply, for log lines.
fn log_snippet(reply: &str) -> String {
    reply.trim().chars().take(120).collect()
}
