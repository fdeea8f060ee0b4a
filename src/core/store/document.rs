//! Per-user document collection backend.
//!
//! Each record is one row of `ledger_documents` tagged with the collection name
//! `historico_<username>`. Persisting deletes the collection and inserts every record
//! again. The two steps are not wrapped in a database transaction: a crash between
//! them leaves the collection partially cleared.

use crate::{
    core::ledger::{Ledger, MovementRecord, parse_timestamp},
    entities::{LedgerDocument, ledger_document},
    errors::{Error, Result, StorageError},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

/// Prefix of every per-user collection name.
pub const COLLECTION_PREFIX: &str = "historico_";

/// Ledger stored as a per-user collection of documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    db: DatabaseConnection,
    collection: String,
}

impl DocumentStore {
    /// Creates a store for `username`'s collection.
    ///
    /// # Errors
    /// Returns a configuration error if `username` is blank.
    pub fn new(db: DatabaseConnection, username: &str) -> Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::Config {
                message: "Document store username cannot be empty".to_string(),
            });
        }

        Ok(Self {
            db,
            collection: format!("{COLLECTION_PREFIX}{username}"),
        })
    }

    /// Name of the collection this store reads and writes.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Reads every document of the collection in insertion order.
    ///
    /// # Errors
    /// Returns a storage error if the query fails or a document holds unknown values.
    pub async fn load(&self) -> Result<Ledger> {
        let documents = LedgerDocument::find()
            .filter(ledger_document::Column::Collection.eq(self.collection.as_str()))
            .order_by_asc(ledger_document::Column::Id)
            .all(&self.db)
            .await?;

        debug!(
            "Loaded {} document(s) from collection {}",
            documents.len(),
            self.collection
        );

        documents
            .into_iter()
            .map(MovementRecord::try_from)
            .collect()
    }

    /// Replaces the collection with the full ledger.
    ///
    /// # Errors
    /// Returns a storage error if deleting or inserting fails.
    pub async fn persist(&self, ledger: &Ledger) -> Result<()> {
        let removed = LedgerDocument::delete_many()
            .filter(ledger_document::Column::Collection.eq(self.collection.as_str()))
            .exec(&self.db)
            .await?;

        if !ledger.is_empty() {
            let documents = ledger
                .iter()
                .map(|record| to_active_model(&self.collection, record));
            LedgerDocument::insert_many(documents)
                .exec(&self.db)
                .await?;
        }

        debug!(
            "Replaced {} document(s) with {} in collection {}",
            removed.rows_affected,
            ledger.len(),
            self.collection
        );
        Ok(())
    }
}

fn to_active_model(collection: &str, record: &MovementRecord) -> ledger_document::ActiveModel {
    ledger_document::ActiveModel {
        collection: Set(collection.to_string()),
        descricao: Set(record.description.clone()),
        quantidade: Set(record.quantity),
        movimento: Set(record.movement.label().to_string()),
        data: Set(record.timestamp_text()),
        setor: Set(record.sector.label().to_string()),
        ..Default::default()
    }
}

impl TryFrom<ledger_document::Model> for MovementRecord {
    type Error = Error;

    fn try_from(document: ledger_document::Model) -> Result<Self> {
        let corrupt = |message: String| {
            Error::Storage(StorageError::Corrupt {
                message: format!("document {}: {message}", document.id),
            })
        };

        let movement = document.movimento.parse().map_err(&corrupt)?;
        let sector = document.setor.parse().map_err(&corrupt)?;
        let timestamp =
            parse_timestamp(&document.data).map_err(|e| corrupt(format!("bad date: {e}")))?;

        Ok(Self {
            description: document.descricao,
            quantity: document.quantidade,
            movement,
            timestamp,
            sector,
        })
    }
}
