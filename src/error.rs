//! Custom error types for sidediff.
//!
//! The diff algorithm itself is infallible; these errors come from reading
//! inputs and producing output.

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SidediffError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },
}

impl InputError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl OutputError {
    pub fn write_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_not_found_display() {
        let err = InputError::file_not_found("old.txt");
        assert_eq!(err.to_string(), "File not found: old.txt");
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = InputError::read_error(
            "old.txt",
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(err.to_string().contains("old.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_write_error_display() {
        let err = OutputError::write_error(
            "/readonly/diff.html",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(err.to_string().contains("Failed to write report"));
        assert!(err.to_string().contains("/readonly/diff.html"));
    }

    #[test]
    fn test_sidediff_error_from_input_error() {
        let err: SidediffError = InputError::file_not_found("old.txt").into();
        assert!(matches!(err, SidediffError::Input(_)));
        assert_eq!(err.to_string(), "File not found: old.txt");
    }

    #[test]
    fn test_config_error() {
        let err = SidediffError::ConfigError {
            message: "stdin used twice".to_string(),
        };
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
