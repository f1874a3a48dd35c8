//! Core line diff algorithm.
//!
//! The diff is computed in three stages:
//!
//! 1. [`lcs_table`] fills the longest-common-subsequence length table.
//! 2. [`backtrack`] walks the table from the far corner back to the origin
//!    and recovers one LCS alignment as a list of matched index pairs.
//! 3. [`build_script`] turns the gaps between consecutive matches into an
//!    edit script, pairing same-gap removals and additions positionally as
//!    modified lines.
//!
//! [`diff`] runs all three stages; [`compute_diff`] additionally collects
//! summary statistics.
//!
//! # Examples
//!
//! ```
//! use sidediff::{diff, DiffLine, DiffLineType};
//!
//! let old = vec!["a", "b", "c"];
//! let new = vec!["a", "b", "c", "d"];
//! let lines = diff(&old, &new);
//!
//! assert_eq!(lines.len(), 4);
//! assert_eq!(lines[3], DiffLine::new(DiffLineType::Added, &"d"));
//! ```

use serde::Serialize;
use std::iter;
use tracing::{debug, trace};

/// Classification of a single line in the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineType {
    /// Present only in the second sequence
    Added,
    /// Present only in the first sequence
    Removed,
    /// Present in both sequences
    Kept,
    /// First-sequence half of a modified pair
    ModifiedFrom,
    /// Second-sequence half of a modified pair
    ModifiedTo,
    /// Column placeholder used by renderers, never produced by [`diff`]
    Blank,
}

/// A single entry of the edit script.
///
/// `value` is `None` only for [`DiffLineType::Blank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine<T> {
    #[serde(rename = "type")]
    pub line_type: DiffLineType,
    pub value: Option<T>,
}

impl<T> DiffLine<T> {
    /// Creates a line carrying `value`.
    pub fn new(line_type: DiffLineType, value: T) -> Self {
        Self {
            line_type,
            value: Some(value),
        }
    }

    /// Creates a [`DiffLineType::Blank`] placeholder.
    pub fn blank() -> Self {
        Self {
            line_type: DiffLineType::Blank,
            value: None,
        }
    }
}

impl<T: Clone> DiffLine<&T> {
    /// Converts a borrowed line into an owned one.
    pub fn cloned(&self) -> DiffLine<T> {
        DiffLine {
            line_type: self.line_type,
            value: self.value.cloned(),
        }
    }
}

/// Longest-common-subsequence length table.
///
/// Cell `(i, j)` holds the LCS length of `first[..i]` and `second[..j]`.
/// The table has `first.len() + 1` rows and `second.len() + 1` columns;
/// row 0 and column 0 are all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Builds the LCS length table for `first` and `second`.
///
/// Time and space are `O(n * m)`.
pub fn lcs_table<T: PartialEq>(first: &[T], second: &[T]) -> LcsTable {
    let mut table = LcsTable::zeroed(first.len() + 1, second.len() + 1);

    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            let value = if a == b {
                table.get(i, j) + 1
            } else {
                table.get(i, j + 1).max(table.get(i + 1, j))
            };
            table.set(i + 1, j + 1, value);
        }
    }

    table
}

/// Recovers one LCS alignment from `table`.
///
/// Returns matched `(first_index, second_index)` pairs, strictly increasing
/// in both coordinates. When the two neighbouring cells are equal the walk
/// steps left (skipping the current element of `second`), which fixes the
/// choice among equally long alignments.
pub fn backtrack<T: PartialEq>(
    table: &LcsTable,
    first: &[T],
    second: &[T],
) -> Vec<(usize, usize)> {
    let (mut i, mut j) = (first.len(), second.len());
    let mut matches = Vec::with_capacity(table.lcs_len());

    while i > 0 && j > 0 {
        if first[i - 1] == second[j - 1] {
            matches.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) > table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // Pairs were collected corner-to-origin.
    matches.reverse();
    matches
}

/// Converts matched pairs into an edit script.
///
/// For every gap between consecutive matches (and after the last one), the
/// unmatched elements of both sides are zipped into `ModifiedFrom` /
/// `ModifiedTo` pairs; the surplus of the longer side follows as `Removed`
/// or `Added` lines, and the match closing the gap is emitted as `Kept`.
///
/// `matches` must be strictly increasing in both coordinates, as returned by
/// [`backtrack`].
pub fn build_script<'a, T>(
    first: &'a [T],
    second: &'a [T],
    matches: &[(usize, usize)],
) -> Vec<DiffLine<&'a T>> {
    let mut lines = Vec::with_capacity(first.len() + second.len());
    let end = (first.len(), second.len());
    let (mut next_a, mut next_b) = (0, 0);

    for &(a, b) in matches.iter().chain(iter::once(&end)) {
        let removed = &first[next_a..a];
        let added = &second[next_b..b];
        let paired = removed.len().min(added.len());

        for (from, to) in removed.iter().zip(added) {
            lines.push(DiffLine::new(DiffLineType::ModifiedFrom, from));
            lines.push(DiffLine::new(DiffLineType::ModifiedTo, to));
        }
        lines.extend(
            removed[paired..]
                .iter()
                .map(|value| DiffLine::new(DiffLineType::Removed, value)),
        );
        lines.extend(
            added[paired..]
                .iter()
                .map(|value| DiffLine::new(DiffLineType::Added, value)),
        );

        if a < first.len() {
            lines.push(DiffLine::new(DiffLineType::Kept, &first[a]));
        }

        next_a = a + 1;
        next_b = b + 1;
    }

    lines
}

/// Computes the edit script turning `first` into `second`.
///
/// Every element of `first` appears exactly once as `Removed`,
/// `ModifiedFrom` or `Kept`; every element of `second` exactly once as
/// `Added`, `ModifiedTo` or `Kept`. The function never fails.
///
/// # Examples
///
/// ```
/// use sidediff::{diff, DiffLineType};
///
/// let old = vec!["a", "b", "c", "d", "e", "f"];
/// let new = vec!["a", "b", "c", "c", "c", "f"];
/// let types: Vec<DiffLineType> = diff(&old, &new).iter().map(|l| l.line_type).collect();
///
/// assert_eq!(types[3], DiffLineType::ModifiedFrom);
/// assert_eq!(types[4], DiffLineType::ModifiedTo);
/// ```
pub fn diff<'a, T: PartialEq>(first: &'a [T], second: &'a [T]) -> Vec<DiffLine<&'a T>> {
    let table = lcs_table(first, second);
    let matches = backtrack(&table, first, second);
    trace!(
        rows = table.rows(),
        cols = table.cols(),
        lcs_len = matches.len(),
        "aligned sequences"
    );
    build_script(first, second, &matches)
}

/// Statistics about an edit script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Number of added lines
    pub added: usize,
    /// Number of removed lines
    pub removed: usize,
    /// Number of modified pairs
    pub modified: usize,
    /// Number of kept lines
    pub kept: usize,
}

impl DiffStats {
    /// Tallies the lines of an edit script. `Blank` lines are ignored.
    pub fn from_lines<T>(lines: &[DiffLine<T>]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.line_type {
                DiffLineType::Added => stats.added += 1,
                DiffLineType::Removed => stats.removed += 1,
                DiffLineType::Kept => stats.kept += 1,
                DiffLineType::ModifiedFrom => stats.modified += 1,
                DiffLineType::ModifiedTo | DiffLineType::Blank => {}
            }
        }
        stats
    }

    /// Returns the total number of changes (excluding kept lines).
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.modified
    }

    /// Returns true if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// An edit script together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff<T> {
    pub lines: Vec<DiffLine<T>>,
    pub stats: DiffStats,
}

impl<T> Diff<T> {
    /// Returns true if the two inputs were identical.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Computes the edit script and its statistics.
///
/// # Examples
///
/// ```
/// use sidediff::compute_diff;
///
/// let old = vec!["a", "b"];
/// let new = vec!["a", "c"];
/// let diff = compute_diff(&old, &new);
///
/// assert_eq!(diff.stats.kept, 1);
/// assert_eq!(diff.stats.modified, 1);
/// ```
pub fn compute_diff<'a, T: PartialEq>(first: &'a [T], second: &'a [T]) -> Diff<&'a T> {
    let lines = diff(first, second);
    let stats = DiffStats::from_lines(&lines);

    debug!(
        first_len = first.len(),
        second_len = second.len(),
        lcs_len = stats.kept,
        added = stats.added,
        removed = stats.removed,
        modified = stats.modified,
        kept = stats.kept,
        "computed diff"
    );

    Diff { lines, stats }
}
