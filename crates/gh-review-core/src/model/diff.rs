//! Diff line structures produced by the patch parser.

/// A single line in a parsed patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiffLine {
    /// Line type.
    pub kind: LineKind,
    /// Line content (without leading +/-/ ). Headers keep their full text.
    pub content: String,
    /// Line number in old file (for Context and Deletion).
    pub old_line: Option<u32>,
    /// Line number in new file (for Context and Addition).
    pub new_line: Option<u32>,
}

impl DiffLine {
    /// Create a hunk header line.
    pub fn header(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Header,
            content: content.into(),
            old_line: None,
            new_line: None,
        }
    }

    /// Create a new context line.
    pub fn context(content: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        Self {
            kind: LineKind::Context,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// Create a new addition line.
    pub fn addition(content: impl Into<String>, new_line: u32) -> Self {
        Self {
            kind: LineKind::Addition,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// Create a new deletion line.
    pub fn deletion(content: impl Into<String>, old_line: u32) -> Self {
        Self {
            kind: LineKind::Deletion,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    /// Whether this line is a hunk header.
    pub fn is_header(&self) -> bool {
        self.kind == LineKind::Header
    }

    /// Get the line number to display (prefers new_line, falls back to old_line).
    pub fn display_line_number(&self) -> Option<u32> {
        self.new_line.or(self.old_line)
    }
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// @@ header line.
    Header,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
    /// Unchanged line (for context).
    Context,
}

impl LineKind {
    /// Get the prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Header => '@',
            LineKind::Addition => '+',
            LineKind::Deletion => '-',
            LineKind::Context => ' ',
        }
    }
}
