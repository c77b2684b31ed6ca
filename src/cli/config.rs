//! Config file and map path resolution
//!
//! Config file lookup:
//! 1. `--config <file>` (must exist)
//! 2. `$DME_HOME/config.toml`
//! 3. `./dme.toml`
//! 4. Built-in defaults
//!
//! Map path priority:
//! 1. `MAP` positional argument
//! 2. `$DME_MAP`
//! 3. `map_path` in the config file
//! 4. Interactive prompt (handled by the caller)

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Error, Result};

/// Environment variable naming the mapping file
pub const MAP_ENV: &str = "DME_MAP";

/// Environment variable naming the config directory
pub const HOME_ENV: &str = "DME_HOME";

/// Config file name inside `$DME_HOME`
const HOME_CONFIG_FILE: &str = "config.toml";

/// Config file name in the working directory
const LOCAL_CONFIG_FILE: &str = "dme.toml";

/// Settings read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mapping file opened when none is given on the command line
    pub map_path: Option<PathBuf>,

    /// Log file (stderr when unset)
    pub log_file: Option<PathBuf>,

    /// Log filter directive
    pub log_level: Option<String>,
}

impl Config {
    /// Load the explicit config file, else the first default location found
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
        match default_config_path(home.as_deref(), Path::new(".")) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// First existing default config file
fn default_config_path(home: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    home.map(|home| home.join(HOME_CONFIG_FILE))
        .into_iter()
        .chain(std::iter::once(cwd.join(LOCAL_CONFIG_FILE)))
        .find(|candidate| candidate.is_file())
}

/// Resolve the mapping file, or `None` when the user must be asked
pub fn resolve_map_path(explicit: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    let env = std::env::var_os(MAP_ENV).map(PathBuf::from);
    pick_map_path(explicit, env, config)
}

fn pick_map_path(
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &Config,
) -> Option<PathBuf> {
    explicit
        .or(env.filter(|path| !path.as_os_str().is_empty()))
        .or_else(|| config.map_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dme.toml");
        fs::write(
            &path,
            "map_path = \"maps/Deob.csv.gz\"\nlog_level = \"info\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.map_path, Some(PathBuf::from("maps/Deob.csv.gz")));
        assert_eq!(config.log_level, Some("info".to_string()));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dme.toml");
        fs::write(&path, "mapp_path = \"typo.csv\"\n").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/dme/config.toml")));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_default_config_path_prefers_home() {
        let home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        fs::write(home.path().join("config.toml"), "").unwrap();
        fs::write(cwd.path().join("dme.toml"), "").unwrap();

        assert_eq!(
            default_config_path(Some(home.path()), cwd.path()),
            Some(home.path().join("config.toml"))
        );
        assert_eq!(
            default_config_path(None, cwd.path()),
            Some(cwd.path().join("dme.toml"))
        );
    }

    #[test]
    fn test_default_config_path_none_found() {
        let cwd = TempDir::new().unwrap();
        assert_eq!(default_config_path(None, cwd.path()), None);
    }

    #[test]
    fn test_map_path_priority() {
        let config = Config {
            map_path: Some(PathBuf::from("from_config.csv")),
            ..Config::default()
        };

        assert_eq!(
            pick_map_path(
                Some(PathBuf::from("flag.csv")),
                Some(PathBuf::from("env.csv")),
                &config
            ),
            Some(PathBuf::from("flag.csv"))
        );
        assert_eq!(
            pick_map_path(None, Some(PathBuf::from("env.csv")), &config),
            Some(PathBuf::from("env.csv"))
        );
        assert_eq!(
            pick_map_path(None, Some(PathBuf::new()), &config),
            Some(PathBuf::from("from_config.csv"))
        );
        assert_eq!(pick_map_path(None, None, &Config::default()), None);
    }
}
