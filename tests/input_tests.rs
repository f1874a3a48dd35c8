use sidediff::input::{is_stdin, load, resolve_path};
use sidediff::{load_pair, read_lines, split_lines, InputError, SidediffError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_split_lines_mixed_endings() {
    assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
}

#[test]
fn test_split_lines_preserves_whitespace() {
    assert_eq!(split_lines("  indented\t\n"), vec!["  indented\t"]);
}

#[test]
fn test_read_fixture() {
    let lines = read_lines(Path::new("tests/fixtures/second.txt")).unwrap();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "abacaba");
    assert_eq!(lines[15], "Lorem ipsum dolor sit amet");
}

#[test]
fn test_read_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    assert!(read_lines(&path).unwrap().is_empty());
}

#[test]
fn test_read_missing_file() {
    let err = read_lines(Path::new("tests/fixtures/nonexistent.txt")).unwrap_err();
    assert!(matches!(err, InputError::FileNotFound { .. }));
    assert!(err.to_string().contains("nonexistent.txt"));
}

#[test]
fn test_read_directory_is_read_error() {
    let dir = tempdir().unwrap();
    let err = read_lines(dir.path()).unwrap_err();
    assert!(matches!(err, InputError::ReadError { .. }));
}

#[test]
fn test_resolve_path() {
    assert_eq!(
        resolve_path(Path::new("/base"), Path::new("dir/file.txt")),
        PathBuf::from("/base/dir/file.txt")
    );
}

#[test]
fn test_is_stdin() {
    assert!(is_stdin(Path::new("-")));
    assert!(!is_stdin(Path::new("-file")));
    assert!(!is_stdin(Path::new("file.txt")));
}

#[test]
fn test_load_relative_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "one\ntwo\n").unwrap();
    assert_eq!(
        load(Path::new("a.txt"), dir.path()).unwrap(),
        vec!["one", "two"]
    );
}

#[test]
fn test_load_pair_double_stdin() {
    let err = load_pair(Path::new("-"), Path::new("-"), Path::new(".")).unwrap_err();
    assert!(matches!(err, SidediffError::ConfigError { .. }));
}

#[test]
fn test_split_lines_lone_carriage_return() {
    assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
}
