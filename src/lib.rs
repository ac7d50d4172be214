//! Domashka: a Telegram assistant that keeps track of school homework
//! through free-form Russian chat, delegating language understanding to
//! Gemini.

pub mod config;
pub mod gemini;
pub mod nlu;
pub mod orchestrator;
pub mod replies;
pub mod store;
pub mod telegram;
pub mod util;
