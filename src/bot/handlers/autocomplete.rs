//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests descriptions already present in the ledger so a removal query matches
//! the stored text.

use crate::{bot::BotData, errors::Error};

/// Provides autocomplete suggestions for product descriptions.
///
/// Returns up to 25 distinct descriptions containing the partial input, ignoring case,
/// sorted alphabetically.
pub async fn autocomplete_description(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let inventory = ctx.data().inventory.lock().await;
    inventory.descriptions_matching(partial)
}
