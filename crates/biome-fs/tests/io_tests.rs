use biome_fs::io::{self, swap_in, temp_path_for};
use biome_fs::{LegacyWriter, StagedFile};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "updated");
}

#[test]
fn test_write_text_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("file.txt");

    io::write_text(&path, "deep content").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "deep content");
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(&temp.path().join("missing.txt"));
    assert!(result.is_err());
}

#[test]
fn test_swap_in_replaces_original() {
    let temp = TempDir::new().unwrap();
    let original = temp.path().join("session.ini");
    let staged = temp_path_for(&original);
    fs::write(&original, "old").unwrap();
    fs::write(&staged, "new").unwrap();

    swap_in(&staged, &original).unwrap();

    assert_eq!(fs::read_to_string(&original).unwrap(), "new");
    assert!(!staged.exists());
}

#[test]
fn test_staged_file_commit_replaces_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("session.ini");
    fs::write(&target, "before").unwrap();

    let mut staged = StagedFile::create(&target).unwrap();
    staged.write_all(b"after").unwrap();

    // Target is untouched until commit
    assert_eq!(fs::read_to_string(&target).unwrap(), "before");

    staged.commit().unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "after");
}

#[test]
fn test_staged_file_dropped_without_commit_removes_temp() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("session.ini");
    fs::write(&target, "before").unwrap();

    let temp_path = {
        let mut staged = StagedFile::create(&target).unwrap();
        staged.write_all(b"abandoned").unwrap();
        staged.temp_path().to_path_buf()
    };

    assert!(!temp_path.exists());
    assert_eq!(fs::read_to_string(&target).unwrap(), "before");
}

#[test]
fn test_staged_file_leaves_no_temp_after_commit() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("session.ini");

    let mut writer = LegacyWriter::new(StagedFile::create(&target).unwrap());
    writer.write_line("[Section]").unwrap();
    writer.into_inner().commit().unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found {:?}", leftovers);
    assert_eq!(fs::read(&target).unwrap(), b"[Section]\r\n");
}

#[test]
fn test_staged_file_in_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("missing").join("session.ini");

    let result = StagedFile::create(&target);
    assert!(matches!(result, Err(biome_fs::Error::Io { .. })));
}
