//! Loading a mapping file
//!
//! Load never fails outward: a missing file, a corrupt gzip stream or any other
//! I/O error yields an empty store and the error as a diagnostic.

use flate2::read::MultiGzDecoder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, trace, warn};

use super::{CodecError, Compression, Result};
use crate::store::{normalize_key, MapStore};

/// Field delimiter within a line
const DELIMITER: char = ';';

/// Result of [`load`]
#[derive(Debug)]
pub struct LoadOutcome {
    /// Loaded entries (empty when `failure` is set)
    pub store: MapStore,
    /// Framing derived from the path suffix
    pub compression: Compression,
    /// Recoverable load failure, if any
    pub failure: Option<CodecError>,
}

/// Load `path`, recovering from any failure with an empty store
pub fn load(path: &Path) -> LoadOutcome {
    let compression = Compression::from_path(path);

    match try_load(path, compression) {
        Ok(store) => {
            info!(
                path = %path.display(),
                entries = store.len(),
                %compression,
                "Loaded mapping"
            );
            LoadOutcome {
                store,
                compression,
                failure: None,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load mapping");
            LoadOutcome {
                store: MapStore::new(),
                compression,
                failure: Some(e),
            }
        }
    }
}

/// Read and parse `path` with the given framing
pub fn try_load(path: &Path, compression: Compression) -> Result<MapStore> {
    let bytes = match compression {
        Compression::Gzip => {
            let file = File::open(path).map_err(|source| CodecError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let mut decoder = MultiGzDecoder::new(BufReader::new(file));
            let mut bytes = Vec::new();
            decoder
                .read_to_end(&mut bytes)
                .map_err(|source| CodecError::Decompress {
                    path: path.to_path_buf(),
                    source,
                })?;
            bytes
        }
        Compression::Plain => fs::read(path).map_err(|source| CodecError::Read {
            path: path.to_path_buf(),
            source,
        })?,
    };

    Ok(parse(&String::from_utf8_lossy(&bytes)))
}

/// Parse mapping text
///
/// Accepts any line with at least two `;`-separated fields; the first is the
/// key, the second the identifier, further fields are ignored. Everything else
/// (headers, blank lines, junk) is skipped. Lines end at `\n`, `\r\n` or a
/// bare `\r`.
///
/// Keys are stored in their saved form, so `a` and `.a` are one entry.
pub fn parse(text: &str) -> MapStore {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut store = MapStore::new();

    for line in text.split(&['\r', '\n'][..]) {
        match parse_line(line) {
            Some((key, identifier)) => {
                store.set(normalize_key(key), identifier);
            }
            None if !line.trim().is_empty() => {
                trace!(line, "Skipping unparseable line");
            }
            None => {}
        }
    }

    store
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.trim().split(DELIMITER);
    let key = fields.next()?;
    let identifier = fields.next()?;
    Some((key, identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_headers_and_blanks() {
        let store = parse("## Classes\n.a;Alpha\n\n## Types\nFoo::1;Bar\n");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(".a"), Some("Alpha"));
        assert_eq!(store.get("Foo::1"), Some("Bar"));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let store = parse("a;Alpha;comment;more");
        assert_eq!(store.get(".a"), Some("Alpha"));
    }

    #[test]
    fn test_parse_trims_lines_and_crlf() {
        let store = parse("  a;Alpha  \r\nb;Beta\r\n");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(".a"), Some("Alpha"));
        assert_eq!(store.get(".b"), Some("Beta"));
    }

    #[test]
    fn test_parse_bare_carriage_return_ends_line() {
        let store = parse("a;A\rb;B\rjunk\r");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(".a"), Some("A"));
        assert_eq!(store.get(".b"), Some("B"));
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let store = parse("a;First\na;Second");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(".a"), Some("Second"));
    }

    #[test]
    fn test_parse_merges_bare_and_rooted_keys() {
        let store = parse("a;First\n.a;Second\nFoo::T;Bar\nx.y;Gamma");
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(".a"), Some("Second"));
        assert!(!store.contains_key("a"));
        assert_eq!(store.get("Foo::T"), Some("Bar"));
        assert_eq!(store.get("x.y"), Some("Gamma"));
    }

    #[test]
    fn test_parse_strips_bom() {
        let store = parse("\u{feff}a;Alpha");
        assert_eq!(store.get(".a"), Some("Alpha"));
    }

    #[test]
    fn test_load_missing_file_recovers() {
        let outcome = load(Path::new("/nonexistent/dme/map.csv.gz"));
        assert!(outcome.store.is_empty());
        assert_eq!(outcome.compression, Compression::Gzip);
        assert!(matches!(outcome.failure, Some(CodecError::Read { .. })));
    }
}
