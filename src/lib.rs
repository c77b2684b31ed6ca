//! dme: editor for deobfuscation maps
//!
//! A map pairs obfuscated names with readable identifiers and lives in a
//! `;`-delimited text file, optionally gzip-framed. The library is layered:
//! - [`store`]: in-memory map
//! - [`codec`]: file format (load, save, ordering)
//! - [`ops`]: pure store operations
//! - [`editor`]: operations bound to a file, saving after each mutation
//! - [`ui`]: interactive menu over the editor

pub mod cli;
pub mod codec;
pub mod editor;
pub mod identifier;
pub mod ops;
pub mod stats;
pub mod store;
pub mod ui;

// Re-exports
pub use codec::{CodecError, Compression, LoadOutcome, MapFile};
pub use editor::{Editor, RenameOutcome};
pub use identifier::is_valid_identifier;
pub use stats::{map_stats, MapStats};
pub use store::{Entry, MapStore};
