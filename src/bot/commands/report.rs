//! Report Discord commands - `export`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Generates the Excel report with every movement and attaches it.
    ///
    /// The file is written to the configured report path, replacing the previous one.
    #[poise::command(slash_command, prefix_command)]
    pub async fn export(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let report_path = &ctx.data().report_path;

        match ctx.data().export_report().await {
            Ok((rows, bytes)) => {
                let attachment =
                    serenity::CreateAttachment::bytes(bytes, ctx.data().report_file_name());
                ctx.send(
                    poise::CreateReply::default()
                        .content(format!(
                            "✅ Relatório gerado: {} ({rows} registro(s))",
                            report_path.display()
                        ))
                        .attachment(attachment),
                )
                .await?;
            }
            Err(Error::NothingToExport) => {
                ctx.say("⚠️ Sem dados para gerar o relatório.").await?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
