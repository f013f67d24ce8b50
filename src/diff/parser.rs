//! Unified diff hunk parser.
//!
//! Parses the `patch` field of a GitHub changed-file payload into
//! `Vec<Hunk>`. Unlike `git diff` output, these payloads carry bare
//! hunks: no `diff --git`, `index` or `---`/`+++` headers.

use crate::models::diff::{DiffLine, DiffLineType, Hunk};

/// Parse a patch string into a list of hunks.
///
/// Lines outside a `@@` block are skipped, so full `git diff` output
/// parses too; the file headers are simply ignored.
pub fn parse_patch(patch: &str) -> Vec<Hunk> {
    let mut hunks: Vec<Hunk> = Vec::new();
    let mut lines = patch.lines().peekable();

    while let Some(&line) = lines.peek() {
        if line.starts_with("@@") {
            if let Some(hunk) = parse_hunk(&mut lines) {
                hunks.push(hunk);
            }
        } else {
            lines.next();
        }
    }

    hunks
}

/// Parse a single hunk starting with a @@ line.
fn parse_hunk(lines: &mut std::iter::Peekable<std::str::Lines<'_>>) -> Option<Hunk> {
    let header_line = lines.next()?;
    let (old_start, old_count, new_start, new_count) = parse_hunk_header(header_line)?;

    let mut hunk_lines: Vec<DiffLine> = Vec::new();
    let mut old_line = old_start;
    let mut new_line = new_start;

    while let Some(&next) = lines.peek() {
        if next.starts_with("@@") {
            break;
        }

        let line = lines.next().expect("peeked line must exist");

        if let Some(content) = line.strip_prefix('+') {
            hunk_lines.push(DiffLine {
                line_type: DiffLineType::Added,
                content: content.to_string(),
                old_line_no: None,
                new_line_no: Some(new_line),
            });
            new_line += 1;
        } else if let Some(content) = line.strip_prefix('-') {
            hunk_lines.push(DiffLine {
                line_type: DiffLineType::Removed,
                content: content.to_string(),
                old_line_no: Some(old_line),
                new_line_no: None,
            });
            old_line += 1;
        } else if line.starts_with(' ') || line.is_empty() {
            let content = if line.is_empty() {
                String::new()
            } else {
                line[1..].to_string()
            };
            hunk_lines.push(DiffLine {
                line_type: DiffLineType::Context,
                content,
                old_line_no: Some(old_line),
                new_line_no: Some(new_line),
            });
            old_line += 1;
            new_line += 1;
        } else if line.starts_with('\\') {
            // "\ No newline at end of file" — skip
            continue;
        } else {
            // Unknown line format, stop parsing this hunk
            break;
        }
    }

    Some(Hunk {
        old_start,
        old_count,
        new_start,
        new_count,
        lines: hunk_lines,
    })
}

/// Parse a `@@ -old_start,old_count +new_start,new_count @@ …` line.
fn parse_hunk_header(line: &str) -> Option<(u32, u32, u32, u32)> {
    let line = line.strip_prefix("@@ ")?;
    let end = line.find(" @@")?;
    let range_part = &line[..end];

    let parts: Vec<&str> = range_part.split(' ').collect();
    if parts.len() != 2 {
        return None;
    }

    let (old_start, old_count) = parse_range(parts[0].strip_prefix('-')?)?;
    let (new_start, new_count) = parse_range(parts[1].strip_prefix('+')?)?;

    Some((old_start, old_count, new_start, new_count))
}

/// Parse "start,count" or "start" (count defaults to 1).
fn parse_range(s: &str) -> Option<(u32, u32)> {
    if let Some((start, count)) = s.split_once(',') {
        Some((start.parse().ok()?, count.parse().ok()?))
    } else {
        Some((s.parse().ok()?, 1))
    }
}
