//! Parse a single file's unified-diff patch (as returned by the GitHub
//! pull request files endpoint) into addressable lines.

use crate::model::DiffLine;
use log::warn;
use regex::Regex;
use std::sync::OnceLock;

fn hunk_header_regex() -> &'static Regex {
    static HUNK_HEADER: OnceLock<Regex> = OnceLock::new();
    HUNK_HEADER.get_or_init(|| Regex::new(r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@").unwrap())
}

/// Extract `(old_start, new_start)` from `@@ -a,b +c,d @@`.
fn parse_hunk_header(line: &str) -> Option<(u32, u32)> {
    let caps = hunk_header_regex().captures(line)?;
    let old_start = caps.get(1)?.as_str().parse().ok()?;
    let new_start = caps.get(2)?.as_str().parse().ok()?;
    Some((old_start, new_start))
}

/// Parse a unified-diff patch into an ordered list of [`DiffLine`]s.
///
/// Line numbers restart from each hunk header. A header that cannot be
/// parsed is still emitted, but the counters keep their previous values.
/// The parser never fails; malformed input yields a best-effort result.
///
/// # Example
/// ```
/// use gh_review_core::{parse_patch, LineKind};
///
/// let lines = parse_patch("@@ -1,1 +1,2 @@\n const foo = 'bar';\n+const added = true;");
/// assert_eq!(lines[2].kind, LineKind::Addition);
/// assert_eq!(lines[2].new_line, Some(2));
/// ```
pub fn parse_patch(patch: &str) -> Vec<DiffLine> {
    if patch.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = patch.split('\n').collect();
    let last_index = segments.len() - 1;

    let mut lines = Vec::with_capacity(segments.len());
    let mut old_line: u32 = 0;
    let mut new_line: u32 = 0;

    for (index, line) in segments.iter().copied().enumerate() {
        // Trailing newline leaves one empty segment behind
        if index == last_index && line.is_empty() && !lines.is_empty() {
            continue;
        }

        if line.starts_with("@@") {
            match parse_hunk_header(line) {
                Some((old_start, new_start)) => {
                    old_line = old_start;
                    new_line = new_start;
                }
                None => warn!("Unparsable hunk header, keeping line counters: {:?}", line),
            }
            lines.push(DiffLine::header(line));
            continue;
        }

        if let Some(content) = line.strip_prefix('+') {
            lines.push(DiffLine::addition(content, new_line));
            new_line = new_line.saturating_add(1);
        } else if let Some(content) = line.strip_prefix('-') {
            lines.push(DiffLine::deletion(content, old_line));
            old_line = old_line.saturating_add(1);
        } else {
            let content = line.strip_prefix(' ').unwrap_or(line);
            lines.push(DiffLine::context(content, old_line, new_line));
            old_line = old_line.saturating_add(1);
            new_line = new_line.saturating_add(1);
        }
    }

    lines
}
