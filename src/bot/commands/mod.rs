//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Movement registration and ledger display
pub mod movement;

/// Product removal
pub mod product;

/// Spreadsheet export
pub mod report;

// Export commands
pub use general::*;
pub use movement::*;
pub use product::*;
pub use report::*;
