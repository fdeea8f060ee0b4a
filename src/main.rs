use dotenvy::dotenv;
use std::env;
use stock_buddy::{
    bot::{self, BotData},
    config,
    core::inventory::Inventory,
    errors::{Error, Result},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Open the ledger from the configured backend
    let store = config::open_store(&app_config.storage)
        .await
        .inspect_err(|e| error!("Failed to open ledger store: {}", e))?;

    let inventory = Inventory::open(store)
        .await
        .inspect_err(|e| error!("Failed to load ledger: {}", e))?;

    // 5. Run the bot
    // DISCORD_BOT_TOKEN is read directly before use, not stored in the config
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(inventory, app_config.report.path)).await
}
