//! Reading input files as sequences of lines.
//!
//! # Examples
//!
//! ```no_run
//! use sidediff::input::read_lines;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lines = read_lines(Path::new("old.txt"))?;
//! println!("{} lines", lines.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{InputError, SidediffError};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path argument meaning "read from standard input".
pub const STDIN_PATH: &str = "-";

/// Splits text into lines.
///
/// `\n`, `\r\n` and a lone `\r` each terminate a line. A trailing terminator
/// does not produce an extra empty line.
///
/// # Examples
///
/// ```
/// use sidediff::input::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Resolves `path` against `base`. Absolute paths are returned unchanged.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    base.join(path)
}

/// Reads a text file into lines.
///
/// The content is decoded as UTF-8. Invalid sequences become U+FFFD
/// replacement characters instead of failing the read.
///
/// # Errors
///
/// - `InputError::FileNotFound` if the file does not exist
/// - `InputError::ReadError` if it cannot be read
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.exists() {
        return Err(InputError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let bytes = fs::read(path)
        .map_err(|e| InputError::read_error(path.to_string_lossy().to_string(), e))?;

    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Reads standard input into lines.
pub fn read_stdin_lines() -> Result<Vec<String>, InputError> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| InputError::read_error("<stdin>", e))?;

    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    debug!(lines = lines.len(), "read standard input");
    Ok(lines)
}

/// Returns true if `path` is the standard input marker.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Resolves and reads both inputs of a diff.
///
/// Relative paths are resolved against `base`. Either input (but not both)
/// may be [`STDIN_PATH`].
pub fn load_pair(
    first: &Path,
    second: &Path,
    base: &Path,
) -> Result<(Vec<String>, Vec<String>), SidediffError> {
    check_inputs(first, second)?;

    let first_lines = load(first, base)?;
    let second_lines = load(second, base)?;
    Ok((first_lines, second_lines))
}

/// Rejects input combinations that cannot be read, such as using standard
/// input for both files.
pub fn check_inputs(first: &Path, second: &Path) -> Result<(), SidediffError> {
    if is_stdin(first) && is_stdin(second) {
        return Err(SidediffError::ConfigError {
            message: "standard input can only be used for one of the two files".to_string(),
        });
    }
    Ok(())
}

/// Reads one input, resolving relative paths against `base`.
pub fn load(path: &Path, base: &Path) -> Result<Vec<String>, InputError> {
    if is_stdin(path) {
        read_stdin_lines()
    } else {
        read_lines(&resolve_path(base, path))
    }
}
