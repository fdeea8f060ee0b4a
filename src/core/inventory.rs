//! Inventory state - the in-memory ledger together with the store it is flushed to.
//!
//! Handlers receive the `Inventory` explicitly instead of reaching for global state.
//! Every mutation goes through [`Inventory::commit`], which persists the candidate
//! ledger first and only swaps it in once the store accepted it.

use crate::{
    core::{ledger::Ledger, store::LedgerStore},
    errors::Result,
};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Discord caps autocomplete suggestions at 25 entries.
const MAX_SUGGESTIONS: usize = 25;

/// Working copy of the ledger and its backing store.
#[derive(Debug)]
pub struct Inventory {
    ledger: Ledger,
    store: LedgerStore,
}

impl Inventory {
    /// Loads the ledger from `store` once.
    ///
    /// # Errors
    /// Returns a storage error if the store exists but cannot be read.
    pub async fn open(store: LedgerStore) -> Result<Self> {
        let ledger = store.load().await?;
        info!(
            "Loaded {} movement record(s) from {}",
            ledger.len(),
            store.describe()
        );
        Ok(Self { ledger, store })
    }

    #[cfg(test)]
    pub(crate) const fn from_parts(ledger: Ledger, store: LedgerStore) -> Self {
        Self { ledger, store }
    }

    /// Current in-memory ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Persists `candidate` and makes it the current ledger.
    ///
    /// # Errors
    /// Returns a storage error if persisting fails; the current ledger is left untouched.
    pub async fn commit(&mut self, candidate: Ledger) -> Result<()> {
        if let Err(e) = self.store.persist(&candidate).await {
            warn!("Failed to persist ledger to {}: {}", self.store.describe(), e);
            return Err(e);
        }
        self.ledger = candidate;
        Ok(())
    }

    /// Distinct descriptions containing `partial` (case-insensitive), sorted.
    #[must_use]
    pub fn descriptions_matching(&self, partial: &str) -> Vec<String> {
        let partial_lower = partial.to_lowercase();
        self.ledger
            .iter()
            .filter(|record| record.description.to_lowercase().contains(&partial_lower))
            .map(|record| record.description.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::FileStore;
    use crate::test_utils::{failing_file_store, sample_ledger, setup_file_inventory};

    #[tokio::test]
    async fn test_open_reads_existing_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path().join("ledger.csv"));
        store.persist(&sample_ledger())?;

        let inventory = Inventory::open(store.into()).await?;
        assert_eq!(inventory.ledger(), &sample_ledger());
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_persists_and_swaps() -> Result<()> {
        let (dir, mut inventory) = setup_file_inventory().await?;

        inventory.commit(sample_ledger()).await?;

        assert_eq!(inventory.ledger(), &sample_ledger());
        let reloaded = FileStore::new(dir.path().join("historico_estoque.csv")).load()?;
        assert_eq!(reloaded, sample_ledger());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_previous_ledger() -> Result<()> {
        let (_dir, store) = failing_file_store()?;
        let mut inventory = Inventory::open(store.into()).await?;

        let result = inventory.commit(sample_ledger()).await;

        assert!(result.is_err_and(|e| e.is_storage()));
        assert!(inventory.ledger().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_descriptions_matching_is_distinct_and_sorted() -> Result<()> {
        let (_dir, mut inventory) = setup_file_inventory().await?;
        inventory.commit(sample_ledger()).await?;

        assert_eq!(
            inventory.descriptions_matching("a"),
            vec!["Dipirona", "Luvas", "Paracetamol", "paracetamol"]
        );
        assert_eq!(inventory.descriptions_matching("PARA"), vec!["Paracetamol", "paracetamol"]);
        assert!(inventory.descriptions_matching("xyz").is_empty());
        Ok(())
    }
}
