//! Changed-file metadata as returned by the hosting API.

use serde::{Deserialize, Serialize};

/// One file changed by a pull request.
///
/// Deserialized directly from the GitHub `pulls/{n}/files` payload;
/// unknown fields are ignored. `patch` is absent for binary or very
/// large files, which produce no issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path of the file relative to the repository root.
    #[serde(rename = "filename")]
    pub path: String,
    /// Unified diff hunks for this file, without the `diff --git` header.
    #[serde(default)]
    pub patch: Option<String>,
    /// Number of added lines.
    #[serde(default)]
    pub additions: u32,
    /// Number of removed lines.
    #[serde(default)]
    pub deletions: u32,
}

impl ChangedFile {
    /// Construct a file from a path and patch text. Line counts are
    /// derived from the patch.
    pub fn from_patch(path: impl Into<String>, patch: impl Into<String>) -> Self {
        let patch = patch.into();
        let additions = patch.lines().filter(|l| l.starts_with('+')).count() as u32;
        let deletions = patch.lines().filter(|l| l.starts_with('-')).count() as u32;
        ChangedFile {
            path: path.into(),
            patch: Some(patch),
            additions,
            deletions,
        }
    }
}
