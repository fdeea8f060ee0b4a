//! Product Discord commands - `remove`.
//!
//! Removal deletes every movement whose description matches, ignoring case, after the
//! author confirms with a button press.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, handlers::confirm, table_block},
        core::product,
        errors::{Error, Result},
    };

    /// Deletes every movement recorded under a product description.
    ///
    /// The match ignores case, so "paracetamol" also removes "Paracetamol". The bot asks
    /// for confirmation with the number of records that will be deleted.
    #[poise::command(slash_command)]
    pub async fn remove(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Description of the product to delete"]
        #[autocomplete = "autocomplete::autocomplete_description"]
        description: String,
    ) -> Result<()> {
        let prepared = {
            let inventory = ctx.data().inventory.lock().await;
            product::prepare_removal(&inventory, &description)
        };

        let request = match prepared {
            Ok(request) => request,
            Err(Error::Cancelled) => {
                ctx.say("ℹ️ Nenhuma descrição informada.").await?;
                return Ok(());
            }
            Err(Error::NotFound { .. }) => {
                ctx.say("⚠️ Produto não encontrado.").await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // The ledger is not locked while waiting for the answer.
        let confirmed = confirm::await_confirmation(ctx, &request.prompt()).await?;

        let reply = {
            let mut inventory = ctx.data().inventory.lock().await;
            match product::confirm_removal(&mut inventory, &request, confirmed).await {
                Ok(removed) => format!(
                    "✅ Produto(s) excluído(s) com sucesso. ({removed} registro(s))\n{}",
                    table_block(inventory.ledger())
                ),
                Err(Error::Cancelled) => "ℹ️ Exclusão cancelada.".to_string(),
                Err(Error::NotFound { .. }) => "⚠️ Produto não encontrado.".to_string(),
                Err(Error::StaleRemoval { current, .. }) => format!(
                    "⚠️ O histórico mudou: agora {current} registro(s) correspondem. \
                     Nada foi excluído, execute /remove novamente."
                ),
                Err(e) => return Err(e),
            }
        };

        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
