//! CSV flat-file backend.
//!
//! The whole ledger is one CSV file with the header
//! `Descrição,Quantidade,Movimento,Data,Setor`. Every persist rewrites the file.

use crate::{
    core::ledger::{COLUMNS, Ledger, MovementRecord},
    errors::Result,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ledger stored in a local CSV file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the file at `path`. The file does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the ledger file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the file. A missing file is an empty ledger.
    ///
    /// # Errors
    /// Returns a storage error if the file cannot be read or a row does not fit the schema.
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            debug!("Ledger file {:?} not found, starting empty", self.path);
            return Ok(Ledger::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let records = reader
            .deserialize::<MovementRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Loaded {} record(s) from {:?}", records.len(), self.path);
        Ok(records.into())
    }

    /// Overwrites the file with the full ledger. The header row is always written.
    ///
    /// # Errors
    /// Returns a storage error if the file or its parent directory cannot be written.
    pub fn persist(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(COLUMNS)?;
        for record in ledger {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!("Wrote {} record(s) to {:?}", ledger.len(), self.path);
        Ok(())
    }
}
