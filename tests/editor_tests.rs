// Integration tests for the file-bound editor
// Tests use the real filesystem, no mocks

use dme::codec::{self, Compression};
use dme::{Editor, RenameOutcome};
use std::fs;
use tempfile::TempDir;

fn write_map(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).expect("Failed to write test file");
    path
}

#[test]
fn test_toggle_plain_to_gzip_and_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plain = write_map(&temp_dir, "m.csv", ".a;Alpha\n.b;Beta");

    let (mut editor, failure) = Editor::open(&plain);
    assert!(failure.is_none());

    let reload_failure = editor.toggle_compression().expect("compress should succeed");
    assert!(reload_failure.is_none());
    let gz = temp_dir.path().join("m.csv.gz");
    assert_eq!(editor.path(), gz.as_path());
    assert_eq!(editor.compression(), Compression::Gzip);
    assert_eq!(editor.store().len(), 2);

    let bytes = fs::read(&gz).expect("Failed to read gzip file");
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    assert!(plain.exists(), "the old file is left in place");

    editor.toggle_compression().expect("decompress should succeed");
    assert_eq!(editor.path(), plain.as_path());
    assert_eq!(editor.compression(), Compression::Plain);
    assert_eq!(editor.store().get(".a"), Some("Alpha"));

    let text = fs::read_to_string(&plain).expect("Failed to read plain file");
    assert!(text.starts_with(codec::CLASSES_HEADER));
}

#[test]
fn test_add_normalizes_and_saves() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("m.csv");
    let (mut editor, _) = Editor::open(&path);

    assert_eq!(editor.add("a", "Alpha").expect("add"), ".a");
    assert_eq!(editor.add("Foo::T", "Bar").expect("add"), "Foo::T");
    assert_eq!(editor.add("x.y", "Gamma").expect("add"), "x.y");

    let on_disk = codec::load(&path).store;
    assert_eq!(on_disk.len(), 3);
    assert_eq!(on_disk.get(".a"), Some("Alpha"));
}

#[test]
fn test_rename_updates_every_match() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_map(&temp_dir, "m.csv", ".a;Old\n.b;Old\n.c;Other\n.d;old");
    let (mut editor, _) = Editor::open(&path);

    assert_eq!(editor.rename_preview("Old").len(), 2);
    assert_eq!(
        editor.rename("Old", "New").expect("rename"),
        RenameOutcome::Renamed(2)
    );

    let on_disk = codec::load(&path).store;
    assert_eq!(on_disk.get(".a"), Some("New"));
    assert_eq!(on_disk.get(".b"), Some("New"));
    assert_eq!(on_disk.get(".d"), Some("old"));
}

#[test]
fn test_rename_without_match_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_map(&temp_dir, "m.csv", "a;Alpha");
    let (mut editor, _) = Editor::open(&path);

    assert_eq!(
        editor.rename("Missing", "New").expect("rename"),
        RenameOutcome::NoMatches
    );
    assert_eq!(fs::read_to_string(&path).expect("read"), "a;Alpha");
}

#[test]
fn test_remove_uses_exact_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_map(&temp_dir, "m.csv", ".a;Alpha\n.b;Beta");
    let (mut editor, _) = Editor::open(&path);

    assert!(!editor.remove("a").expect("remove"));
    assert!(editor.remove(".a").expect("remove"));

    let on_disk = codec::load(&path).store;
    assert_eq!(on_disk.len(), 1);
    assert!(!on_disk.contains_key(".a"));
}

#[test]
fn test_clean_removes_invalid_identifiers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_map(
        &temp_dir,
        "m.csv",
        ".a;Alpha\n.b;1bad\n.c;has space\n.d;ok.Nested_1\n.e;",
    );
    let (mut editor, _) = Editor::open(&path);

    let candidates = editor.clean_candidates();
    let keys: Vec<&str> = candidates.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec![".b", ".c", ".e"]);

    assert_eq!(editor.remove_invalid(&candidates).expect("clean"), 3);
    assert!(editor.clean_candidates().is_empty());

    let on_disk = codec::load(&path).store;
    assert_eq!(on_disk.len(), 2);
}

#[test]
fn test_reload_persists_then_reads_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_map(&temp_dir, "m.csv", "a;Alpha");
    let (mut editor, _) = Editor::open(&path);

    let failure = editor.reload().expect("reload");
    assert!(failure.is_none());
    assert_eq!(editor.store().get(".a"), Some("Alpha"));
    assert!(!editor.store().contains_key("a"));
}

#[test]
fn test_stats_reflect_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_map(&temp_dir, "m.csv", ".a;Alpha\n.b;Alpha\n.c;Gamma");
    let (editor, _) = Editor::open(&path);

    let stats = editor.stats();
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.distinct_identifiers, 2);
    assert!(stats.last_modified.is_some());
    assert_eq!(stats.size_bytes, Some(fs::metadata(&path).unwrap().len()));
    assert_eq!(stats.compression, Compression::Plain);
}
