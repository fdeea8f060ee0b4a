//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete,
//! button clicks, and other non-command interactions.

/// Autocomplete handlers for product descriptions
pub mod autocomplete;
/// Yes/No confirmation buttons
pub mod confirm;
