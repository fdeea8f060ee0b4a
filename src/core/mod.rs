//! Core business logic - framework-agnostic ledger operations.
//!
//! Nothing in here knows about Discord. Every operation takes the [`inventory::Inventory`]
//! (or a plain [`ledger::Ledger`]) explicitly and returns structured data or a domain
//! error that the bot layer turns into a reply.

/// In-memory ledger plus its backing store
pub mod inventory;
/// Movement records and the ordered ledger
pub mod ledger;
/// Registering inbound/outbound movements
pub mod movement;
/// Removing every record of a product
pub mod product;
/// Spreadsheet export
pub mod report;
/// Backing store variants
pub mod store;
/// Text table rendering
pub mod table;
