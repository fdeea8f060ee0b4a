//! Entity module - Contains the SeaORM entity definitions for the document store.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod ledger_document;

pub use ledger_document::{Entity as LedgerDocument, Model as LedgerDocumentModel};
