//! Product removal business logic.
//!
//! Removing a product deletes every record whose description matches the query,
//! ignoring case. Removal is two-phase so the presentation layer can ask for
//! confirmation in between: [`prepare_removal`] reports how many records match and
//! [`confirm_removal`] applies or drops the request.

use crate::{
    core::inventory::Inventory,
    errors::{Error, Result},
};
use tracing::{info, instrument};

/// A pending removal awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    /// Description as the user typed it
    pub query: String,
    /// Number of records matching when the request was prepared
    pub matches: usize,
}

impl RemovalRequest {
    /// Confirmation prompt shown to the user.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Deseja realmente excluir {} registro(s) com descrição '{}'?",
            self.matches, self.query
        )
    }
}

/// Looks up the records a removal of `query` would delete.
///
/// # Errors
/// Returns [`Error::Cancelled`] for an empty query and [`Error::NotFound`] when no
/// record matches. A whitespace-only query is searched like any other text.
pub fn prepare_removal(inventory: &Inventory, query: &str) -> Result<RemovalRequest> {
    if query.is_empty() {
        return Err(Error::Cancelled);
    }

    let matches = inventory.ledger().count_matching(query);
    if matches == 0 {
        return Err(Error::NotFound {
            description: query.to_string(),
        });
    }

    Ok(RemovalRequest {
        query: query.to_string(),
        matches,
    })
}

/// Applies a prepared removal if the user confirmed it.
///
/// Matching is re-evaluated against the current ledger. Only the exact set of records
/// the prompt counted is removed: if the count changed in between, nothing is removed
/// and the user has to confirm again.
///
/// # Errors
/// Returns [`Error::Cancelled`] when declined, [`Error::NotFound`] if nothing matches
/// any more, [`Error::StaleRemoval`] if the match count changed, or a storage error if
/// persisting fails.
#[instrument(skip(inventory))]
pub async fn confirm_removal(
    inventory: &mut Inventory,
    request: &RemovalRequest,
    confirmed: bool,
) -> Result<usize> {
    if !confirmed {
        info!("Removal of '{}' declined", request.query);
        return Err(Error::Cancelled);
    }

    let candidate = inventory.ledger().without_description(&request.query);
    let removed = inventory.ledger().len() - candidate.len();
    if removed == 0 {
        return Err(Error::NotFound {
            description: request.query.clone(),
        });
    }
    if removed != request.matches {
        info!(
            "Removal of '{}' is stale: {} confirmed, {} now match",
            request.query, request.matches, removed
        );
        return Err(Error::StaleRemoval {
            description: request.query.clone(),
            confirmed: request.matches,
            current: removed,
        });
    }

    inventory.commit(candidate).await?;

    info!("Removed {} record(s) described as '{}'", removed, request.query);
    Ok(removed)
}

/// Prepares and applies a removal in one step.
///
/// # Errors
/// See [`prepare_removal`] and [`confirm_removal`].
pub async fn remove_product(inventory: &mut Inventory, query: &str, confirmed: bool) -> Result<usize> {
    let request = prepare_removal(inventory, query)?;
    confirm_removal(inventory, &request, confirmed).await
}
