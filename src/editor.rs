//! Editing session over one mapping file
//!
//! Owns the explicit `(path, compression)` state and the store. Every mutation
//! is flushed to disk immediately. A failed save leaves the in-memory store
//! intact so the caller can retry.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::codec::{self, CodecError, Compression, MapFile};
use crate::ops;
use crate::stats::{map_stats, MapStats};
use crate::store::{Entry, MapStore};

/// Outcome of a rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    NoMatches,
    Renamed(usize),
}

/// Editing session
#[derive(Debug)]
pub struct Editor {
    file: MapFile,
    store: MapStore,
}

impl Editor {
    /// Load `path`; a load failure is returned alongside an empty session
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<CodecError>) {
        let path = path.into();
        let outcome = codec::load(&path);
        let editor = Self {
            file: MapFile {
                path,
                compression: outcome.compression,
            },
            store: outcome.store,
        };
        (editor, outcome.failure)
    }

    /// Wrap an existing store without touching disk
    pub fn with_store(file: MapFile, store: MapStore) -> Self {
        Self { file, store }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }

    pub fn compression(&self) -> Compression {
        self.file.compression
    }

    pub fn file(&self) -> &MapFile {
        &self.file
    }

    pub fn store(&self) -> &MapStore {
        &self.store
    }

    pub fn stats(&self) -> MapStats {
        map_stats(&self.store, &self.file)
    }

    pub fn save(&self) -> codec::Result<()> {
        self.file.save(&self.store)
    }

    pub fn search(&self, term: &str) -> Vec<Entry> {
        ops::search(&self.store, term)
    }

    /// Entries a rename of `identifier` would touch
    pub fn rename_preview(&self, identifier: &str) -> Vec<Entry> {
        ops::entries_with_identifier(&self.store, identifier)
    }

    /// Insert or overwrite, returning the stored (normalized) key
    pub fn add(&mut self, key: &str, identifier: &str) -> codec::Result<String> {
        let stored = ops::add_entry(&mut self.store, key, identifier);
        debug!(key = %stored, identifier, "Added entry");
        self.save()?;
        Ok(stored)
    }

    pub fn rename(&mut self, old: &str, new: &str) -> codec::Result<RenameOutcome> {
        match ops::rename_identifier(&mut self.store, old, new) {
            0 => Ok(RenameOutcome::NoMatches),
            count => {
                info!(old, new, count, "Renamed identifier");
                self.save()?;
                Ok(RenameOutcome::Renamed(count))
            }
        }
    }

    /// Remove `key`; persists only when something was removed
    pub fn remove(&mut self, key: &str) -> codec::Result<bool> {
        if !self.store.remove(key) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Entries whose identifier is not well-formed
    pub fn clean_candidates(&self) -> Vec<Entry> {
        ops::invalid_entries(&self.store)
    }

    /// Remove `candidates` in one batch and persist once
    pub fn remove_invalid(&mut self, candidates: &[Entry]) -> codec::Result<usize> {
        let removed = ops::remove_entries(&mut self.store, candidates);
        if removed > 0 {
            info!(removed, "Removed invalid entries");
            self.save()?;
        }
        Ok(removed)
    }

    /// Flip framing, save under the new path, then reload from it
    ///
    /// Returns the reload failure, if any; the reloaded store replaces the
    /// in-memory one either way.
    pub fn toggle_compression(&mut self) -> codec::Result<Option<CodecError>> {
        let (path, compression) = ops::toggled(&self.file.path, self.file.compression);
        let next = MapFile { path, compression };

        next.save(&self.store)?;
        info!(path = %next.path.display(), %compression, "Toggled compression");

        let outcome = next.load();
        self.file = next;
        self.store = outcome.store;
        Ok(outcome.failure)
    }

    /// Save the current state, then load it fresh
    pub fn reload(&mut self) -> codec::Result<Option<CodecError>> {
        self.save()?;
        let outcome = self.file.load();
        self.file.compression = outcome.compression;
        self.store = outcome.store;
        Ok(outcome.failure)
    }
}
