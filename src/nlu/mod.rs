//! Natural-language understanding for incoming utterances.
//!
//! Pipeline pieces: prompt builders, the JSON extraction boundary,
//! intent classification, field extraction and subject normalization.
//! All model I/O goes through [`json::ask_for_json`]; nothing in here
//! talks HTTP directly.

pub mod extract;
pub mod intent;
pub mod json;
pub mod morph;
pub mod normalize;
pub mod prompts;

pub use extract::{extract_homework, extract_query, HomeworkQuery};
pub use intent::{classify, Intent};
