//! Confirmation prompt with Yes/No buttons.
//!
//! The prompt is a request/response step: the bot posts the question, then waits for
//! the command author to press a button. No answer within the timeout counts as "no".

use crate::{bot::Context, errors::Result};
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::debug;

/// How long the author has to answer a confirmation prompt.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Posts `prompt` with Yes/No buttons and waits for the author's answer.
///
/// Returns `true` only if the author pressed "Sim". The buttons are removed once the
/// prompt is answered or expires.
pub async fn await_confirmation(ctx: Context<'_>, prompt: &str) -> Result<bool> {
    let ctx_id = ctx.id();
    let yes_id = format!("{ctx_id}_yes");
    let no_id = format!("{ctx_id}_no");

    let buttons = serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(&yes_id)
            .label("Sim")
            .style(serenity::ButtonStyle::Danger),
        serenity::CreateButton::new(&no_id)
            .label("Não")
            .style(serenity::ButtonStyle::Secondary),
    ]);

    let reply = ctx
        .send(
            poise::CreateReply::default()
                .content(prompt)
                .components(vec![buttons]),
        )
        .await?;

    let prefix = ctx_id.to_string();
    let press = serenity::ComponentInteractionCollector::new(ctx)
        .author_id(ctx.author().id)
        .filter(move |press| press.data.custom_id.starts_with(&prefix))
        .timeout(CONFIRMATION_TIMEOUT)
        .await;

    let Some(press) = press else {
        debug!("Confirmation prompt timed out");
        reply
            .edit(
                ctx,
                poise::CreateReply::default()
                    .content(format!("{prompt}\n⌛ Tempo esgotado."))
                    .components(Vec::new()),
            )
            .await?;
        return Ok(false);
    };

    let confirmed = press.data.custom_id == yes_id;
    let answer = if confirmed { "Sim" } else { "Não" };
    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content(format!("{prompt}\n➡️ {answer}"))
                    .components(Vec::new()),
            ),
        )
        .await?;

    Ok(confirmed)
}
