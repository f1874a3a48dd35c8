use sidediff::{InputError, OutputError, OutputFormat, SidediffError};
use std::io;

#[test]
fn test_file_not_found_display() {
    let err = InputError::file_not_found("old.txt");
    assert_eq!(err.to_string(), "File not found: old.txt");
}

#[test]
fn test_read_error_display() {
    let err = InputError::read_error("old.txt", io::Error::new(io::ErrorKind::Other, "boom"));
    assert_eq!(err.to_string(), "Failed to read file old.txt: boom");
}

#[test]
fn test_unknown_output_format() {
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, OutputError::UnknownFormat { .. }));
    assert_eq!(err.to_string(), "Unknown output format: xml");
}

#[test]
fn test_sidediff_error_from_output_error() {
    let source = io::Error::new(io::ErrorKind::Other, "full");
    let err: SidediffError = OutputError::write_error("diff.html", source).into();
    assert!(matches!(err, SidediffError::Output(_)));
    assert!(err.to_string().contains("diff.html"));
}

#[test]
fn test_config_error() {
    let err = SidediffError::ConfigError {
        message: "Invalid option".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid configuration: Invalid option");
}
