//! Saving a mapping file
//!
//! Output is grouped (`## Classes`, then `## Types`), deterministically
//! ordered and written as UTF-8 without a byte-order mark. Downstream tools
//! read the file with decoders that do not skip a BOM.

use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::order::{sort_classes, sort_types};
use super::{CodecError, Compression, Result};
use crate::store::{is_type_key, normalize_key, Entry, MapStore};

pub const CLASSES_HEADER: &str = "## Classes";
pub const TYPES_HEADER: &str = "## Types";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Write `store` to `path`, fully overwriting it
pub fn save(path: &Path, store: &MapStore, compression: Compression) -> Result<()> {
    let text = render(store);
    let write_error = |source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    };

    match compression {
        Compression::Plain => fs::write(path, text.as_bytes()).map_err(write_error)?,
        Compression::Gzip => {
            let file = File::create(path).map_err(write_error)?;
            let mut encoder = GzEncoder::new(BufWriter::new(file), flate2::Compression::best());
            encoder.write_all(text.as_bytes()).map_err(write_error)?;
            encoder
                .finish()
                .and_then(|mut inner| inner.flush())
                .map_err(write_error)?;
        }
    }

    info!(
        path = %path.display(),
        entries = store.len(),
        %compression,
        "Saved mapping"
    );
    Ok(())
}

/// Render the grouped, ordered text of `store`
///
/// Lines are joined with [`LINE_ENDING`] without a trailing terminator. A
/// group's header is left out when the group is empty.
pub fn render(store: &MapStore) -> String {
    let (mut classes, mut types): (Vec<Entry>, Vec<Entry>) = store
        .entries()
        .into_iter()
        .partition(|e| !is_type_key(&e.key));

    sort_classes(&mut classes);
    sort_types(&mut types);

    let mut lines = Vec::with_capacity(store.len() + 3);

    if !classes.is_empty() {
        lines.push(CLASSES_HEADER.to_string());
        lines.extend(classes.iter().map(format_line));
    }

    if !types.is_empty() {
        if !classes.is_empty() {
            lines.push(String::new());
        }
        lines.push(TYPES_HEADER.to_string());
        lines.extend(types.iter().map(format_line));
    }

    lines.join(LINE_ENDING)
}

fn format_line(entry: &Entry) -> String {
    format!("{};{}", normalize_key(&entry.key), entry.identifier)
}
