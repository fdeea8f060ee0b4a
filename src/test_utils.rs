//! Shared test utilities for `StockBuddy`.
//!
//! This module provides common helpers for setting up test stores and building
//! movement records with fixed timestamps.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        inventory::Inventory,
        ledger::{Ledger, Movement, MovementRecord, Sector, parse_timestamp},
        store::FileStore,
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Creates an in-memory `SQLite` database with the document table initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a record with a fixed `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn record_at(
    description: &str,
    quantity: i64,
    movement: Movement,
    sector: Sector,
    timestamp: &str,
) -> MovementRecord {
    MovementRecord {
        description: description.to_string(),
        quantity,
        movement,
        timestamp: parse_timestamp(timestamp).unwrap(),
        sector,
    }
}

/// Four records: two differently-cased "Paracetamol" rows, "Luvas" and "Dipirona".
pub fn sample_ledger() -> Ledger {
    vec![
        record_at("Paracetamol", 50, Movement::Inbound, Sector::Pharmacy, "2024-05-01 08:00:00"),
        record_at("Luvas", 100, Movement::Inbound, Sector::Warehouse, "2024-05-01 09:15:00"),
        record_at("paracetamol", 10, Movement::Outbound, Sector::Pharmacy, "2024-05-02 10:30:00"),
        record_at("Dipirona", 20, Movement::Inbound, Sector::Pharmacy, "2024-05-03 11:45:30"),
    ]
    .into()
}

/// Opens an empty inventory backed by `historico_estoque.csv` in a fresh temp dir.
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn setup_file_inventory() -> Result<(TempDir, Inventory)> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("historico_estoque.csv"));
    let inventory = Inventory::open(store.into()).await?;
    Ok((dir, inventory))
}

/// A file store that loads as empty but cannot be persisted, because its parent
/// "directory" is a regular file.
pub fn failing_file_store() -> Result<(TempDir, FileStore)> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "")?;
    Ok((dir, FileStore::new(blocker.join("historico_estoque.csv"))))
}
