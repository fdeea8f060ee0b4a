//! Unified error types for `StockBuddy`.
//!
//! Domain outcomes (`Validation`, `NotFound`, `Cancelled`, `NothingToExport`) are
//! recoverable and reported back to the user. Storage failures are grouped under
//! [`StorageError`] so callers can tell a bad input from a broken backing store.

use thiserror::Error;

/// Failures of the ledger's backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the ledger file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ledger file is not valid CSV for the ledger schema
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The document database rejected a query
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored row could not be mapped back to a movement record
    #[error("Corrupt ledger data: {message}")]
    Corrupt {
        /// What was wrong with the stored row
        message: String,
    },
}

/// Application error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed user input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable reason
        message: String,
    },

    /// A removal query matched no record
    #[error("No records found with description '{description}'")]
    NotFound {
        /// The description that was searched for
        description: String,
    },

    /// The ledger changed between the confirmation prompt and the answer
    #[error("Confirmed {confirmed} record(s) for '{description}' but {current} now match")]
    StaleRemoval {
        /// The description that was searched for
        description: String,
        /// Match count shown in the confirmation prompt
        confirmed: usize,
        /// Match count in the current ledger
        current: usize,
    },

    /// The user declined or aborted a confirmation
    #[error("Operation cancelled")]
    Cancelled,

    /// Export was requested on an empty ledger
    #[error("No data to export")]
    NothingToExport,

    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Writing the spreadsheet report failed
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable reason
        message: String,
    },

    /// A required environment variable is missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error came from the backing store.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

impl From<sea_orm::DbErr> for Error {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Storage(StorageError::Database(value))
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Storage(StorageError::Csv(value))
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Storage(StorageError::Io(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_storage() {
        let err: Error = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(err.is_storage());
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_validation_is_not_storage() {
        let err = Error::validation("missing field");
        assert!(!err.is_storage());
        assert_eq!(err.to_string(), "Validation error: missing field");
    }
}
