//! Logging setup
//!
//! stdout belongs to the interactive menu, so logs go to stderr or, with
//! `--log-file`, to a file through a non-blocking writer.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Config, Error, Result};

/// Filter used when nothing else is configured
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Flag → `RUST_LOG` → config → default
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let rust_log = std::env::var("RUST_LOG").ok();
        Self::pick(args, config, rust_log)
    }

    fn pick(args: &Args, config: &Config, rust_log: Option<String>) -> Self {
        let filter = args
            .log_level
            .clone()
            .or(rust_log.filter(|s| !s.trim().is_empty()))
            .or_else(|| config.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            filter,
            file: args.log_file.clone().or_else(|| config.log_file.clone()),
        }
    }
}

/// Keeps the file writer flushing until dropped
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

/// Install the global tracing subscriber
pub fn init_logging(settings: &LogSettings) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_new(&settings.filter)
        .map_err(|_| Error::LogFilter(settings.filter.clone()))?;

    match &settings.file {
        Some(path) => {
            let appender = file_appender(path)?;
            let (writer, worker) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
            Ok(LoggingGuard {
                _worker: Some(worker),
            })
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
            Ok(LoggingGuard { _worker: None })
        }
    }
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Logging(format!("'{}' is not a file path", path.display())))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(log_level: Option<&str>, log_file: Option<&str>) -> Args {
        Args {
            map: None,
            config: None,
            log_file: log_file.map(PathBuf::from),
            log_level: log_level.map(String::from),
        }
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = Config {
            log_level: Some("info".to_string()),
            log_file: Some(PathBuf::from("config.log")),
            ..Config::default()
        };
        let settings = LogSettings::pick(&args(Some("debug"), Some("flag.log")), &config, None);
        assert_eq!(settings.filter, "debug");
        assert_eq!(settings.file, Some(PathBuf::from("flag.log")));
    }

    #[test]
    fn test_rust_log_then_config_then_default() {
        let config = Config {
            log_level: Some("info".to_string()),
            ..Config::default()
        };
        assert_eq!(
            LogSettings::pick(&args(None, None), &config, Some("trace".into())).filter,
            "trace"
        );
        assert_eq!(
            LogSettings::pick(&args(None, None), &config, Some("  ".into())).filter,
            "info"
        );
        assert_eq!(
            LogSettings::pick(&args(None, None), &config, None).filter,
            "info"
        );
        let settings = LogSettings::pick(&args(None, None), &Config::default(), None);
        assert_eq!(settings.filter, DEFAULT_LOG_FILTER);
        assert!(settings.file.is_none());
    }

    #[test]
    fn test_file_appender_rejects_directory_only_path() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
