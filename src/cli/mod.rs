//! CLI module
//!
//! Provides:
//! - Argument parsing
//! - Config file loading
//! - Map path resolution (flag → env → config → prompt)
//! - Logging setup

pub mod args;
pub mod config;
pub mod logging;

// Re-exports
pub use args::Args;
pub use config::{resolve_map_path, Config, HOME_ENV, MAP_ENV};
pub use logging::{init_logging, LogSettings, LoggingGuard};

use std::path::PathBuf;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid log filter '{0}'")]
    LogFilter(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
