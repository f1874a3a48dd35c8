//! Output formatting for diff results.
//!
//! This module renders an edit script as an HTML report, colored terminal
//! text, plain text or JSON, and writes reports to disk.
//!
//! # Examples
//!
//! ```
//! use sidediff::{compute_diff, format_diff, OutputFormat, OutputOptions};
//!
//! let old = vec!["a", "b"];
//! let new = vec!["a", "c"];
//! let diff = compute_diff(&old, &new);
//!
//! let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert!(output.contains("Summary: 1 modified, 1 kept"));
//! ```

use crate::diff::{Diff, DiffLine, DiffLineType, DiffStats};
use crate::error::OutputError;
use crate::html;
use colored::*;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// File name of the HTML report when no output path is given.
pub const DEFAULT_REPORT_NAME: &str = "diff.html";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Side-by-side HTML report
    Html,
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// Plain text, no colors (suitable for piping)
    Plain,
    /// JSON representation of the edit script
    Json,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "terminal" => Ok(Self::Terminal),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(OutputError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Options for controlling output formatting.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Hide kept lines in terminal and plain output
    pub compact: bool,
    /// Maximum length for displayed values (truncate if longer)
    pub max_value_length: usize,
    /// Title of the left column in the HTML report
    pub first_label: String,
    /// Title of the right column in the HTML report
    pub second_label: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_value_length: 120,
            first_label: "first".to_string(),
            second_label: "second".to_string(),
        }
    }
}

/// Formats a diff according to the specified format and options.
///
/// # Errors
///
/// Returns `OutputError::JsonSerializationError` if the JSON output cannot be
/// produced.
pub fn format_diff<T>(
    diff: &Diff<T>,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError>
where
    T: Display + Clone + serde::Serialize,
{
    match format {
        OutputFormat::Html => Ok(html::render_report(
            &diff.lines,
            &options.first_label,
            &options.second_label,
        )),
        OutputFormat::Terminal => Ok(format_terminal(diff, options)),
        OutputFormat::Plain => Ok(format_plain(diff, options)),
        OutputFormat::Json => format_json(diff),
    }
}

/// Writes a rendered report to `path`.
pub fn write_report(path: &Path, content: &str) -> Result<(), OutputError> {
    fs::write(path, content)
        .map_err(|e| OutputError::write_error(path.to_string_lossy().to_string(), e))?;
    info!(path = %path.display(), bytes = content.len(), "wrote report");
    Ok(())
}

/// Formats a diff for terminal output with colors.
///
/// Color scheme:
/// - Added: green
/// - Removed: red
/// - Modified pairs: yellow
/// - Kept: dimmed (unless compact)
fn format_terminal<T: Display>(diff: &Diff<T>, options: &OutputOptions) -> String {
    if diff.is_empty() {
        return "No changes detected.".dimmed().to_string();
    }

    let mut output = String::new();
    for line in diff.lines.iter().filter(|l| should_show_line(l, options)) {
        output.push_str(&format_line_terminal(line, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&diff.stats));
    output
}

fn format_line_terminal<T: Display>(line: &DiffLine<T>, options: &OutputOptions) -> String {
    let value = format_value(line, options.max_value_length);
    let marker = line_marker(line.line_type);

    match line.line_type {
        DiffLineType::Added => format!("{} {}", marker.bright_green(), value.green()),
        DiffLineType::Removed => format!("{} {}", marker.bright_red(), value.red()),
        DiffLineType::ModifiedFrom | DiffLineType::ModifiedTo => {
            format!("{} {}", marker.bright_yellow(), value.yellow())
        }
        DiffLineType::Kept | DiffLineType::Blank => format!("{} {}", marker, value.dimmed()),
    }
}

/// Formats a diff for plain text output (no colors).
fn format_plain<T: Display>(diff: &Diff<T>, options: &OutputOptions) -> String {
    if diff.is_empty() {
        return "No changes detected.".to_string();
    }

    let mut output = String::new();
    for line in diff.lines.iter().filter(|l| should_show_line(l, options)) {
        output.push_str(&format_line_plain(line, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&diff.stats));
    output
}

fn format_line_plain<T: Display>(line: &DiffLine<T>, options: &OutputOptions) -> String {
    format!(
        "{} {}",
        line_marker(line.line_type),
        format_value(line, options.max_value_length)
    )
}

/// One-character marker prefixed to each line.
fn line_marker(line_type: DiffLineType) -> &'static str {
    match line_type {
        DiffLineType::Added => "+",
        DiffLineType::Removed => "-",
        DiffLineType::ModifiedFrom => "•",
        DiffLineType::ModifiedTo => "→",
        DiffLineType::Kept | DiffLineType::Blank => " ",
    }
}

/// Formats a diff as JSON: the edit script plus statistics.
fn format_json<T: serde::Serialize>(diff: &Diff<T>) -> Result<String, OutputError> {
    use serde_json::json;

    let output = json!({
        "lines": diff.lines,
        "stats": diff.stats,
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

/// Displays a line's value, truncated to `max_length` characters.
fn format_value<T: Display>(line: &DiffLine<T>, max_length: usize) -> String {
    let value = match &line.value {
        Some(value) => value.to_string(),
        None => return String::new(),
    };

    if value.chars().count() > max_length {
        let kept: String = value.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        value
    }
}

fn should_show_line<T>(line: &DiffLine<T>, options: &OutputOptions) -> bool {
    !(options.compact && line.line_type == DiffLineType::Kept)
}

/// Formats summary statistics.
fn format_summary(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: No changes".to_string();
    }

    let mut parts = Vec::new();
    if stats.added > 0 {
        parts.push(format!("{} added", stats.added));
    }
    if stats.removed > 0 {
        parts.push(format!("{} removed", stats.removed));
    }
    if stats.modified > 0 {
        parts.push(format!("{} modified", stats.modified));
    }
    if stats.kept > 0 {
        parts.push(format!("{} kept", stats.kept));
    }

    format!("Summary: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use DiffLineType::*;

    fn plain_options() -> OutputOptions {
        OutputOptions::default()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown output format: xml");
    }

    #[test]
    fn test_format_value_truncation() {
        let line = DiffLine::new(Kept, "a".repeat(100));
        let formatted = format_value(&line, 20);
        assert_eq!(formatted.chars().count(), 20);
        assert!(formatted.ends_with("..."));
    }

    #[test]
    fn test_format_value_multibyte() {
        let line = DiffLine::new(Kept, "ü".repeat(10));
        assert_eq!(format_value(&line, 5), "üü...");
    }

    #[test]
    fn test_format_value_blank() {
        let line: DiffLine<&str> = DiffLine::blank();
        assert_eq!(format_value(&line, 10), "");
    }

    #[test]
    fn test_should_show_line_compact() {
        let options = OutputOptions {
            compact: true,
            ..Default::default()
        };
        assert!(!should_show_line(&DiffLine::new(Kept, "a"), &options));
        assert!(should_show_line(&DiffLine::new(Added, "a"), &options));
        assert!(should_show_line(&DiffLine::new(Kept, "a"), &plain_options()));
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(&DiffStats::default()), "Summary: No changes");

        let stats = DiffStats {
            added: 2,
            removed: 1,
            modified: 3,
            kept: 5,
        };
        assert_eq!(
            format_summary(&stats),
            "Summary: 2 added, 1 removed, 3 modified, 5 kept"
        );
    }

    #[test]
    fn test_format_plain_no_changes() {
        let lines = ["a", "b"];
        let diff = compute_diff(&lines, &lines);
        assert_eq!(format_plain(&diff, &plain_options()), "No changes detected.");
    }

    #[test]
    fn test_format_plain_with_changes() {
        let diff = compute_diff(&["a", "b", "c"], &["a", "x", "c", "d"]);
        let output = format_plain(&diff, &plain_options());

        assert_eq!(
            output,
            "  a\n• b\n→ x\n  c\n+ d\n\nSummary: 1 added, 1 modified, 2 kept"
        );
    }

    #[test]
    fn test_format_plain_compact() {
        let options = OutputOptions {
            compact: true,
            ..Default::default()
        };
        let diff = compute_diff(&["a", "b"], &["a"]);
        assert_eq!(
            format_plain(&diff, &options),
            "- b\n\nSummary: 1 removed, 1 kept"
        );
    }

    #[test]
    fn test_format_json() {
        let diff = compute_diff(&["a"], &["b"]);
        let output = format_json(&diff).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["lines"][0]["type"], "modified_from");
        assert_eq!(value["lines"][0]["value"], "a");
        assert_eq!(value["lines"][1]["type"], "modified_to");
        assert_eq!(value["stats"]["modified"], 1);
    }

    #[test]
    fn test_format_terminal_no_changes() {
        let empty: Vec<&str> = Vec::new();
        let diff = compute_diff(&empty, &empty);
        let output = format_terminal(&diff, &plain_options());
        assert!(output.contains("No changes"));
    }

    #[test]
    fn test_format_diff_html_uses_labels() {
        let options = OutputOptions {
            first_label: "left.txt".to_string(),
            second_label: "right.txt".to_string(),
            ..Default::default()
        };
        let diff = compute_diff(&["a"], &["a", "b"]);
        let output = format_diff(&diff, &OutputFormat::Html, &options).unwrap();
        assert!(output.contains("left.txt"));
        assert!(output.contains("right.txt"));
        assert!(output.contains("withBorder added"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_REPORT_NAME);
        write_report(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_report_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_REPORT_NAME);
        let result = write_report(&path, "x");
        assert!(matches!(result, Err(OutputError::WriteError { .. })));
    }
}
