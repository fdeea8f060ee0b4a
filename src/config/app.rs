//! Application configuration loading from config.toml
//!
//! The config file chooses the ledger backend and where the report is written. Every
//! key is optional: without a config file the ledger lives in `historico_estoque.csv`
//! and reports go to `relatorio_estoque.xlsx` in the working directory.

use crate::{
    config::database,
    core::store::{DocumentStore, FileStore, LedgerStore},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default ledger file for the file backend.
pub const DEFAULT_LEDGER_PATH: &str = "historico_estoque.csv";
/// Default report location.
pub const DEFAULT_REPORT_PATH: &str = "relatorio_estoque.xlsx";
/// Environment variable overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "STOCK_BUDDY_CONFIG";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which backend holds the ledger
    pub storage: StorageConfig,
    /// Spreadsheet export settings
    pub report: ReportConfig,
}

/// Ledger backend selection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Local CSV file
    File {
        /// Path of the ledger file
        #[serde(default = "default_ledger_path")]
        path: PathBuf,
    },
    /// Per-user document collection
    Document {
        /// Owner of the collection (`historico_<username>`)
        username: String,
        /// Database URL; falls back to `DATABASE_URL`, then the default `SQLite` file
        #[serde(default)]
        database_url: Option<String>,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File {
            path: default_ledger_path(),
        }
    }
}

/// Spreadsheet export settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Fixed location the report is written to
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_PATH)
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

/// Loads configuration from `$STOCK_BUDDY_CONFIG` or `./config.toml`.
///
/// A missing default file is not an error; the built-in defaults are used.
///
/// # Errors
/// Returns an error if an explicitly named file is missing, or any file is invalid.
pub fn load_default_config() -> Result<AppConfig> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        return load_config(path);
    }

    let path = Path::new("config.toml");
    if path.exists() {
        load_config(path)
    } else {
        info!("No config.toml found, using default configuration");
        Ok(AppConfig::default())
    }
}

/// Builds the ledger store the configuration selects.
///
/// # Errors
/// Returns an error if the database cannot be reached or the username is blank.
pub async fn open_store(config: &StorageConfig) -> Result<LedgerStore> {
    match config {
        StorageConfig::File { path } => Ok(FileStore::new(path.clone()).into()),
        StorageConfig::Document {
            username,
            database_url,
        } => {
            let url = database_url
                .clone()
                .unwrap_or_else(database::get_database_url);
            let db = database::create_connection(&url).await?;
            database::create_tables(&db).await?;
            Ok(DocumentStore::new(db, username)?.into())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.report.path, PathBuf::from("relatorio_estoque.xlsx"));
    }

    #[test]
    fn test_parse_file_backend() {
        let toml_str = r#"
            [storage]
            backend = "file"
            path = "data/estoque.csv"

            [report]
            path = "out/relatorio.xlsx"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("data/estoque.csv")
            }
        );
        assert_eq!(config.report.path, PathBuf::from("out/relatorio.xlsx"));
    }

    #[test]
    fn test_parse_document_backend() {
        let toml_str = r#"
            [storage]
            backend = "document"
            username = "gleison"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::Document {
                username: "gleison".to_string(),
                database_url: None,
            }
        );
    }

    #[test]
    fn test_document_backend_requires_username() {
        let toml_str = r#"
            [storage]
            backend = "document"
        "#;

        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[tokio::test]
    async fn test_open_store_selects_backend() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = StorageConfig::File {
            path: dir.path().join("ledger.csv"),
        };
        assert!(matches!(open_store(&file).await?, LedgerStore::File(_)));

        let document = StorageConfig::Document {
            username: "maria".to_string(),
            database_url: Some("sqlite::memory:".to_string()),
        };
        let store = open_store(&document).await?;
        assert!(matches!(&store, LedgerStore::Document(s) if s.collection() == "historico_maria"));
        assert!(store.load().await?.is_empty());
        Ok(())
    }
}
