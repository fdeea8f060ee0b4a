//! Movement Discord commands - `register` and `ledger`.
//!
//! `register` is the inventory form: description, quantity, movement direction and
//! sector. Every successful registration replies with the refreshed ledger table.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, table_block},
        core::{
            ledger::{Movement, Sector},
            movement::{MISSING_FIELD, QUANTITY_NOT_INTEGER, register_movement},
        },
        errors::{Error, Result},
    };

    /// Movement direction as offered in the slash command.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum MovementChoice {
        #[name = "Entrada"]
        Entrada,
        #[name = "Saída"]
        Saida,
    }

    impl From<MovementChoice> for Movement {
        fn from(choice: MovementChoice) -> Self {
            match choice {
                MovementChoice::Entrada => Self::Inbound,
                MovementChoice::Saida => Self::Outbound,
            }
        }
    }

    /// Sector as offered in the slash command.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum SectorChoice {
        #[name = "📦 Almoxarifado"]
        Almoxarifado,
        #[name = "💊 Farmácia"]
        Farmacia,
    }

    impl From<SectorChoice> for Sector {
        fn from(choice: SectorChoice) -> Self {
            match choice {
                SectorChoice::Almoxarifado => Self::Warehouse,
                SectorChoice::Farmacia => Self::Pharmacy,
            }
        }
    }

    /// User-facing text for a validation failure.
    #[must_use]
    pub fn validation_text(message: &str) -> &str {
        match message {
            MISSING_FIELD => "Preencha todos os campos.",
            QUANTITY_NOT_INTEGER => "Quantidade deve ser um número inteiro",
            other => other,
        }
    }

    /// Records an inbound or outbound stock movement.
    ///
    /// The quantity is stored exactly as typed, whatever the movement direction.
    #[poise::command(slash_command)]
    pub async fn register(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product description (e.g., 'Paracetamol 500mg')"] description: String,
        #[description = "Quantity, a whole number"] quantity: String,
        #[description = "Entrada (inbound) or Saída (outbound)"] movement: MovementChoice,
        #[description = "Department the movement belongs to"] sector: SectorChoice,
    ) -> Result<()> {
        let reply = {
            let mut inventory = ctx.data().inventory.lock().await;
            match register_movement(
                &mut inventory,
                &description,
                &quantity,
                movement.into(),
                sector.into(),
            )
            .await
            {
                Ok(record) => format!(
                    "✅ {} registrada com sucesso.\n{}",
                    record.movement,
                    table_block(inventory.ledger())
                ),
                Err(Error::Validation { message }) => {
                    format!("❌ {}", validation_text(&message))
                }
                Err(e) => return Err(e),
            }
        };

        ctx.say(reply).await?;
        Ok(())
    }

    /// Shows the most recent movements in the ledger.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ledger(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let reply = {
            let inventory = ctx.data().inventory.lock().await;
            format!(
                "📋 {} movimento(s) registrado(s).\n{}",
                inventory.ledger().len(),
                table_block(inventory.ledger())
            )
        };

        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
