//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `StockBuddy`: the slash commands
//! that stand in for the inventory form, the confirmation buttons used before a
//! removal, and autocomplete for product descriptions.

/// Discord command implementations (movement, product, report, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, confirmation buttons)
pub mod handlers;

use crate::{
    config::app::DEFAULT_REPORT_PATH,
    core::{inventory::Inventory, ledger::Ledger, report, table},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Rows shown when the ledger table is refreshed in a reply.
const TABLE_ROWS: usize = 15;
/// Discord rejects messages longer than 2000 characters.
const MAX_TABLE_CHARS: usize = 1800;

/// Shared data available to all bot commands.
/// The inventory sits behind an async mutex so each command runs its ledger
/// operation to completion before the next one starts.
pub struct BotData {
    /// In-memory ledger and its backing store
    pub inventory: Mutex<Inventory>,
    /// Fixed location the spreadsheet report is written to
    pub report_path: PathBuf,
}

impl BotData {
    /// Creates a new `BotData` instance around a loaded inventory.
    #[must_use]
    pub fn new(inventory: Inventory, report_path: PathBuf) -> Self {
        Self {
            inventory: Mutex::new(inventory),
            report_path,
        }
    }

    /// Writes the report and reads it back as one step under the inventory lock.
    ///
    /// Returns the number of data rows and the file contents. Holding the lock until
    /// the file is read keeps a concurrent export from rewriting it in between.
    ///
    /// # Errors
    /// Returns [`Error::NothingToExport`] for an empty ledger, or an export or I/O error.
    pub async fn export_report(&self) -> Result<(usize, Vec<u8>)> {
        let inventory = self.inventory.lock().await;
        let rows = report::export_report(inventory.ledger(), &self.report_path)?;
        let bytes = std::fs::read(&self.report_path)?;
        Ok((rows, bytes))
    }

    /// File name of the report, used for the Discord attachment.
    #[must_use]
    pub fn report_file_name(&self) -> String {
        self.report_path.file_name().map_or_else(
            || DEFAULT_REPORT_PATH.to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Poise context used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Renders the most recent ledger rows as a Markdown code block that fits in one message.
#[must_use]
pub fn table_block(ledger: &Ledger) -> String {
    let mut rows = TABLE_ROWS;
    loop {
        let rendered = table::render_ledger(ledger, rows);
        if rendered.chars().count() <= MAX_TABLE_CHARS || rows == 0 {
            return format!("```\n{rendered}```");
        }
        rows -= 1;
    }
}

/// Reply text for a command error that reached the framework.
#[must_use]
pub fn error_reply(error: &Error) -> String {
    if error.is_storage() {
        format!("❌ Falha ao acessar o histórico, nenhuma alteração foi aplicada: {error}")
    } else {
        format!("❌ An error occurred: {error}")
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(error_reply(&error)).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves the slash commands until the client stops.
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::register(),
                commands::ledger(),
                commands::remove(),
                commands::export(),
                commands::ping(),
                commands::help(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    // Slash commands and button presses need no privileged intents
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::{Movement, MovementRecord, Sector};
    use crate::test_utils::{sample_ledger, setup_file_inventory};

    #[test]
    fn test_table_block_is_code_block() {
        let block = table_block(&sample_ledger());
        assert!(block.starts_with("```\nDescrição"));
        assert!(block.ends_with("```"));
    }

    #[tokio::test]
    async fn test_export_report_returns_written_file() -> Result<()> {
        let (dir, mut inventory) = setup_file_inventory().await?;
        inventory.commit(sample_ledger()).await?;
        let data = BotData::new(inventory, dir.path().join("out").join("relatorio.xlsx"));
        std::fs::create_dir_all(dir.path().join("out"))?;

        let (rows, bytes) = data.export_report().await?;

        assert_eq!(rows, sample_ledger().len());
        assert_eq!(bytes, std::fs::read(&data.report_path)?);
        assert!(bytes.starts_with(b"PK"));
        assert_eq!(data.report_file_name(), "relatorio.xlsx");
        Ok(())
    }

    #[tokio::test]
    async fn test_export_report_empty_ledger() -> Result<()> {
        let (dir, inventory) = setup_file_inventory().await?;
        let data = BotData::new(inventory, dir.path().join("relatorio.xlsx"));

        assert!(matches!(data.export_report().await, Err(Error::NothingToExport)));
        assert!(!data.report_path.exists());
        Ok(())
    }

    #[test]
    fn test_error_reply_flags_storage_failures() {
        let storage: Error = std::io::Error::other("disk full").into();
        let reply = error_reply(&storage);
        assert!(reply.starts_with("❌ Falha ao acessar o histórico"));
        assert!(reply.contains("disk full"));

        let other = Error::Config {
            message: "bad".to_string(),
        };
        assert!(error_reply(&other).starts_with("❌ An error occurred"));
    }

    #[test]
    fn test_table_block_fits_in_one_message() {
        let long_name = "Soro fisiológico 0,9% frasco 500 mL ".repeat(4);
        let ledger: Ledger = (0..40)
            .map(|i| MovementRecord::new(format!("{long_name}{i}"), i, Movement::Inbound, Sector::Pharmacy))
            .collect();

        let block = table_block(&ledger);
        assert!(block.chars().count() <= MAX_TABLE_CHARS + 8);
        assert!(block.contains("earlier record(s) not shown"));
    }
}
