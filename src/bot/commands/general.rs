//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't touch the ledger
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Controle de Estoque - Almoxarifado e Farmácia**\n\
        Here is a summary of all available commands.\n\n\
        **Ledger Commands**\n\
        • `/register <description> <quantity> <movement> <sector>` - Records an inbound (Entrada) or outbound (Saída) movement.\n\
        • `/ledger` - Shows the most recent movements.\n\
        • `/remove <description>` - Deletes every movement with that description (asks for confirmation).\n\
        • `/export` - Generates the Excel report with every movement.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
