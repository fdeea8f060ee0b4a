//! Ledger persistence - one store capability with two interchangeable backends.
//!
//! The backend is chosen once at construction (see [`crate::config::app`]). Both
//! backends load the full ledger and persist by total replacement.

/// Per-user document collection in a SeaORM database
pub mod document;
/// Local CSV file
pub mod file;

pub use document::DocumentStore;
pub use file::FileStore;

use crate::{core::ledger::Ledger, errors::Result};

/// Backing store of the ledger.
#[derive(Debug, Clone)]
pub enum LedgerStore {
    /// CSV flat file
    File(FileStore),
    /// Per-user document collection
    Document(DocumentStore),
}

impl LedgerStore {
    /// Reads the full ledger. An absent store yields an empty ledger.
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot be read.
    pub async fn load(&self) -> Result<Ledger> {
        match self {
            Self::File(store) => store.load(),
            Self::Document(store) => store.load().await,
        }
    }

    /// Overwrites the backend with the full ledger.
    ///
    /// # Errors
    /// Returns a storage error if the backend cannot be written.
    pub async fn persist(&self, ledger: &Ledger) -> Result<()> {
        match self {
            Self::File(store) => store.persist(ledger),
            Self::Document(store) => store.persist(ledger).await,
        }
    }

    /// Short human-readable description of where the ledger lives.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(store) => format!("file {}", store.path().display()),
            Self::Document(store) => format!("collection {}", store.collection()),
        }
    }
}

impl From<FileStore> for LedgerStore {
    fn from(store: FileStore) -> Self {
        Self::File(store)
    }
}

impl From<DocumentStore> for LedgerStore {
    fn from(store: DocumentStore) -> Self {
        Self::Document(store)
    }
}
