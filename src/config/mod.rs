/// Backend selection, report location, and config.toml loading
pub mod app;

/// Database configuration and connection management
pub mod database;

pub use app::{AppConfig, ReportConfig, StorageConfig, load_default_config, open_store};
