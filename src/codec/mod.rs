//! Persistence codec: mapping file <-> [`MapStore`]
//!
//! On-disk format (UTF-8, no BOM, optionally gzip-framed):
//!
//! ```text
//! ## Classes
//! <key>;<identifier>
//!
//! ## Types
//! <key>;<identifier>
//! ```
//!
//! Framing is signalled by the `.gz` path suffix. The compression state is an
//! explicit [`MapFile`] value passed to every load/save, never ambient state.

mod load;
mod order;
mod save;

pub use load::{load, parse, try_load, LoadOutcome};
pub use save::{render, save, CLASSES_HEADER, LINE_ENDING, TYPES_HEADER};

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::MapStore;

/// Path suffix signalling gzip framing
pub const GZIP_SUFFIX: &str = ".gz";

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// File framing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
}

impl Compression {
    /// Derive framing from the `.gz` suffix (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        if has_gzip_suffix(path) {
            Compression::Gzip
        } else {
            Compression::Plain
        }
    }

    pub fn is_gzip(self) -> bool {
        self == Compression::Gzip
    }

    pub fn toggled(self) -> Self {
        match self {
            Compression::Plain => Compression::Gzip,
            Compression::Gzip => Compression::Plain,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Plain => write!(f, "plain"),
            Compression::Gzip => write!(f, "gzip"),
        }
    }
}

/// True when the path ends with `.gz`, ignoring ASCII case
pub fn has_gzip_suffix(path: &Path) -> bool {
    let path = path.to_string_lossy();
    path.len() >= GZIP_SUFFIX.len()
        && path
            .get(path.len() - GZIP_SUFFIX.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(GZIP_SUFFIX))
}

/// A mapping file location together with its framing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    pub path: PathBuf,
    pub compression: Compression,
}

impl MapFile {
    /// Framing is derived from the path suffix
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let compression = Compression::from_path(&path);
        Self { path, compression }
    }

    pub fn load(&self) -> LoadOutcome {
        load(&self.path)
    }

    pub fn save(&self, store: &MapStore) -> Result<()> {
        save(&self.path, store, self.compression)
    }
}
