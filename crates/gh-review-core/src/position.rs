//! Conversion between diff-line indices and GitHub diff positions.
//!
//! A GitHub "position" is the 1-based ordinal of a line within a file's
//! patch, counting every line except hunk headers.

use crate::model::{DiffLine, DiffSide};

/// The anchor a new comment on a diff line would get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTarget {
    pub line: u32,
    pub side: DiffSide,
    pub position: Option<u32>,
}

/// Position of the line at `index`, or `None` for headers and out-of-range indices.
pub fn position_for_line(lines: &[DiffLine], index: usize) -> Option<u32> {
    let target = lines.get(index)?;
    if target.is_header() {
        return None;
    }

    let count = lines[..=index].iter().filter(|l| !l.is_header()).count();
    u32::try_from(count).ok()
}

/// Index of the line with the given position, or `None` if there is none.
pub fn line_index_for_position(lines: &[DiffLine], position: u32) -> Option<usize> {
    if position == 0 {
        return None;
    }

    let mut current = 0u32;
    for (index, line) in lines.iter().enumerate() {
        if line.is_header() {
            continue;
        }
        current += 1;
        if current == position {
            return Some(index);
        }
    }

    None
}

/// Where a comment started on the line at `index` would be anchored.
///
/// Deletions anchor to the old image (`LEFT`), everything else to the new
/// image (`RIGHT`).
pub fn comment_target(lines: &[DiffLine], index: usize) -> Option<CommentTarget> {
    let line = lines.get(index)?;
    if line.is_header() {
        return None;
    }

    let side = DiffSide::for_line_kind(line.kind);
    let number = match side {
        DiffSide::Left => line.old_line,
        DiffSide::Right => line.new_line,
    };

    Some(CommentTarget {
        line: number.filter(|n| *n > 0)?,
        side,
        position: position_for_line(lines, index),
    })
}
