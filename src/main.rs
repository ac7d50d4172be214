//! Process bootstrap: env, logging, config, wiring, polling.

use std::sync::Arc;

use domashka::config::Config;
use domashka::gemini::GeminiClient;
use domashka::orchestrator::Assistant;
use domashka::store::HomeworkStore;
use domashka::telegram::{run_poller, TelegramClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("configuration error: {}", err);
            std::process::exit(1);
        }
    };

    log::info!(
        "starting with model {} in timezone {}",
        config.gemini_model,
        config.timezone
    );

    let gateway = Arc::new(GeminiClient::new(
        config.gemini_api_key,
        config.gemini_model,
    ));
    let assistant = Assistant::new(gateway, HomeworkStore::new(), config.timezone);
    let client = TelegramClient::new(config.telegram_token);

    run_poller(client, assistant).await;
}
