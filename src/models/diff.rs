//! Diff-related types: hunks and typed diff lines.

use serde::{Deserialize, Serialize};

/// The type of a line in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLineType {
    /// Line exists only in the new version (added).
    Added,
    /// Line exists only in the old version (removed).
    Removed,
    /// Line is unchanged (context).
    Context,
}

/// A single line in a diff hunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffLine {
    /// The type of change.
    pub line_type: DiffLineType,
    /// The content of the line (without the leading +/-/space).
    pub content: String,
    /// Line number in the old file (None for added lines).
    pub old_line_no: Option<u32>,
    /// Line number in the new file (None for removed lines).
    pub new_line_no: Option<u32>,
}

/// A contiguous hunk within a file's patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunk {
    /// Starting line in the old file.
    pub old_start: u32,
    /// Number of lines in the old file.
    pub old_count: u32,
    /// Starting line in the new file.
    pub new_start: u32,
    /// Number of lines in the new file.
    pub new_count: u32,
    /// The lines in this hunk.
    pub lines: Vec<DiffLine>,
}

/// Borrowed view of an added line: its position in the new file and
/// its content. The only input the heuristics see.
#[derive(Debug, Clone, Copy)]
pub struct AddedLine<'a> {
    pub line_no: u32,
    pub text: &'a str,
}

impl Hunk {
    /// The added lines of this hunk, in appearance order.
    pub fn added_lines(&self) -> Vec<AddedLine<'_>> {
        self.lines
            .iter()
            .filter(|l| l.line_type == DiffLineType::Added)
            .filter_map(|l| {
                l.new_line_no.map(|line_no| AddedLine {
                    line_no,
                    text: l.content.as_str(),
                })
            })
            .collect()
    }
}
