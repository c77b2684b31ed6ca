//! Mapping statistics shown in the session banner
//!
//! Entry counts come from the store; modification time and size come from the
//! file metadata and are absent when the file does not exist yet.

use chrono::{DateTime, Local};
use std::fs;

use crate::codec::{Compression, MapFile};
use crate::store::MapStore;

/// Statistics for one mapping file
#[derive(Debug, Clone, PartialEq)]
pub struct MapStats {
    /// Number of unique identifiers
    pub distinct_identifiers: usize,
    /// Number of entries
    pub total_entries: usize,
    /// File last-modified time
    pub last_modified: Option<DateTime<Local>>,
    /// File size in bytes
    pub size_bytes: Option<u64>,
    /// Framing of the file
    pub compression: Compression,
}

impl MapStats {
    /// Size in whole KiB, for display
    pub fn size_kib(&self) -> Option<u64> {
        self.size_bytes.map(|bytes| bytes / 1024)
    }
}

/// Compute statistics for `store` persisted at `file`
pub fn map_stats(store: &MapStore, file: &MapFile) -> MapStats {
    let metadata = fs::metadata(&file.path).ok();

    MapStats {
        distinct_identifiers: store.distinct_identifier_count(),
        total_entries: store.len(),
        last_modified: metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Local>::from),
        size_bytes: metadata.map(|m| m.len()),
        compression: file.compression,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_map_stats_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("map.csv");
        let mut f = File::create(&path).unwrap();
        f.write_all(&[b'x'; 2048]).unwrap();

        let store: MapStore = [("a", "Same"), ("b", "Same"), ("c", "Other")]
            .into_iter()
            .collect();
        let stats = map_stats(&store, &MapFile::new(&path));

        assert_eq!(stats.distinct_identifiers, 2);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.size_bytes, Some(2048));
        assert_eq!(stats.size_kib(), Some(2));
        assert!(stats.last_modified.is_some());
        assert_eq!(stats.compression, Compression::Plain);
    }

    #[test]
    fn test_map_stats_missing_file() {
        let stats = map_stats(
            &MapStore::new(),
            &MapFile::new("/nonexistent/dme/map.csv.gz"),
        );
        assert_eq!(stats.total_entries, 0);
        assert!(stats.size_bytes.is_none());
        assert!(stats.last_modified.is_none());
        assert_eq!(stats.compression, Compression::Gzip);
    }
}
