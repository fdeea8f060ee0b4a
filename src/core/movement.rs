//! Movement registration business logic.
//!
//! This module validates form input and appends a single movement record to the
//! ledger. Validation failures never touch the ledger or the store.

use crate::{
    core::{
        inventory::Inventory,
        ledger::{Movement, MovementRecord, Sector},
    },
    errors::{Error, Result},
};
use tracing::{info, instrument};

/// Message for a blank description or quantity.
pub const MISSING_FIELD: &str = "missing field";
/// Message for a quantity that is not a base-10 integer.
pub const QUANTITY_NOT_INTEGER: &str = "quantity not an integer";

/// Checks the raw form fields and parses the quantity.
///
/// Surrounding whitespace in the quantity is ignored. The sign is kept as typed
/// whatever the movement direction.
///
/// # Errors
/// Returns [`Error::Validation`] if a field is blank or the quantity is not an integer.
pub fn validate_movement_input(description: &str, quantity_text: &str) -> Result<i64> {
    let quantity_text = quantity_text.trim();
    if description.trim().is_empty() || quantity_text.is_empty() {
        return Err(Error::validation(MISSING_FIELD));
    }

    quantity_text
        .parse::<i64>()
        .map_err(|_| Error::validation(QUANTITY_NOT_INTEGER))
}

/// Validates the input and appends a new record stamped with the current time.
///
/// The ledger with the new record is persisted before it replaces the in-memory copy.
///
/// # Errors
/// Returns a validation error for bad input, or a storage error if persisting fails.
#[instrument(skip(inventory))]
pub async fn register_movement(
    inventory: &mut Inventory,
    description: &str,
    quantity_text: &str,
    movement: Movement,
    sector: Sector,
) -> Result<MovementRecord> {
    let quantity = validate_movement_input(description, quantity_text)?;
    let record = MovementRecord::new(description.to_string(), quantity, movement, sector);

    let mut candidate = inventory.ledger().clone();
    candidate.push(record.clone());
    inventory.commit(candidate).await?;

    info!(
        "Registered {} of {} x '{}' for {}",
        record.movement, record.quantity, record.description, record.sector
    );
    Ok(record)
}
