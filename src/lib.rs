//! sidediff - line-oriented diff with side-by-side reports.
//!
//! This library compares two sequences of lines using a longest common
//! subsequence alignment and classifies every line as kept, added, removed
//! or part of a modified pair. The resulting edit script can be rendered as
//! an HTML report, colored terminal output, plain text or JSON.
//!
//! # Example
//!
//! ```no_run
//! use sidediff::{compute_diff, format_diff, read_lines, OutputFormat, OutputOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let old = read_lines(Path::new("old.txt"))?;
//! let new = read_lines(Path::new("new.txt"))?;
//!
//! let diff = compute_diff(&old, &new);
//!
//! let output = format_diff(&diff, &OutputFormat::Terminal, &OutputOptions::default())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod html;
pub mod input;
pub mod output;

// Re-export commonly used types for convenience
pub use diff::{
    backtrack, build_script, compute_diff, diff, lcs_table, Diff, DiffLine, DiffLineType,
    DiffStats, LcsTable,
};
pub use error::{InputError, OutputError, SidediffError};
pub use input::{load_pair, read_lines, split_lines};
pub use output::{format_diff, write_report, OutputFormat, OutputOptions};
