//! Changed-file records as listed for a pull request.

use crate::model::DiffLine;
use crate::parser::{detect_language, parse_patch};
use log::debug;

/// A single file changed by a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Current file path (after rename if applicable).
    pub filename: String,
    pub status: FileStatus,
    pub additions: u64,
    pub deletions: u64,
    pub changes: u64,
    /// Unified-diff patch. Empty for binary or oversized files.
    pub patch: String,
    /// Previous file path (if renamed).
    pub previous_filename: Option<String>,
}

impl FileChange {
    /// Create a modified-file record with the given patch.
    pub fn new(filename: impl Into<String>, patch: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: FileStatus::Modified,
            additions: 0,
            deletions: 0,
            changes: 0,
            patch: patch.into(),
            previous_filename: None,
        }
    }

    /// Parse the patch into addressable lines.
    pub fn diff_lines(&self) -> Vec<DiffLine> {
        parse_patch(&self.patch)
    }

    /// Language identifier for syntax highlighting.
    pub fn language(&self) -> &'static str {
        detect_language(&self.filename)
    }

    /// Get the display name for the file (handles renames).
    pub fn display_name(&self) -> String {
        match self.previous_filename {
            Some(ref old) if old != &self.filename => format!("{} → {}", old, self.filename),
            _ => self.filename.clone(),
        }
    }

    /// Whether GitHub supplied no patch (binary or too large).
    pub fn has_patch(&self) -> bool {
        !self.patch.is_empty()
    }
}

/// File status in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl FileStatus {
    /// Map the GitHub file-listing status string.
    pub fn from_github_str(status: &str) -> Self {
        match status {
            "added" => FileStatus::Added,
            "removed" => FileStatus::Deleted,
            "renamed" => FileStatus::Renamed,
            _ => FileStatus::Modified,
        }
    }

    /// Get a single-character representation.
    pub fn as_char(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified => 'M',
            FileStatus::Deleted => 'D',
            FileStatus::Renamed => 'R',
        }
    }
}

/// The changed files of a pull request and the one currently shown.
///
/// The selected index always stays within `0..files.len()`; moves past
/// either end are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<FileChange>,
    selected: usize,
}

impl FileSelection {
    /// Select the first file of `files`.
    pub fn new(files: Vec<FileChange>) -> Self {
        Self { files, selected: 0 }
    }

    pub fn files(&self) -> &[FileChange] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected file, `None` when there are no files.
    pub fn selected(&self) -> Option<&FileChange> {
        self.files.get(self.selected)
    }

    /// Select `index` if it names a file. Returns whether it did.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.files.len() {
            self.selected = index;
            true
        } else {
            debug!("Ignoring file index {} of {}", index, self.files.len());
            false
        }
    }

    /// Select the file whose current path is `path`.
    pub fn select_path(&mut self, path: &str) -> bool {
        match self.files.iter().position(|f| f.filename == path) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.files.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Drop all files and go back to the first index.
    pub fn reset(&mut self) {
        self.files.clear();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_status_from_github() {
        assert_eq!(FileStatus::from_github_str("added"), FileStatus::Added);
        assert_eq!(FileStatus::from_github_str("removed"), FileStatus::Deleted);
        assert_eq!(FileStatus::from_github_str("renamed"), FileStatus::Renamed);
        assert_eq!(FileStatus::from_github_str("modified"), FileStatus::Modified);
        assert_eq!(FileStatus::from_github_str("copied"), FileStatus::Modified);
        assert_eq!(FileStatus::from_github_str("unchanged"), FileStatus::Modified);
    }

    #[test]
    fn test_display_name() {
        let mut file = FileChange::new("src/new.rs", "");
        assert_eq!(file.display_name(), "src/new.rs");

        file.previous_filename = Some("src/old.rs".to_string());
        assert_eq!(file.display_name(), "src/old.rs → src/new.rs");

        // Same path shouldn't show arrow
        file.previous_filename = Some("src/new.rs".to_string());
        assert_eq!(file.display_name(), "src/new.rs");
    }

    #[test]
    fn test_binary_file_has_no_lines() {
        let file = FileChange::new("logo.png", "");
        assert!(!file.has_patch());
        assert!(file.diff_lines().is_empty());
        assert_eq!(file.language(), "plaintext");
    }

    #[test]
    fn test_diff_lines_and_language() {
        let file = FileChange::new("app/main.py", "@@ -1 +1 @@\n-a\n+b");
        assert_eq!(file.diff_lines().len(), 3);
        assert_eq!(file.language(), "python");
    }

    fn three_files() -> FileSelection {
        FileSelection::new(vec![
            FileChange::new("a.rs", ""),
            FileChange::new("b.rs", ""),
            FileChange::new("c.rs", ""),
        ])
    }

    #[test]
    fn test_selection_starts_at_first_file() {
        let selection = three_files();
        assert_eq!(selection.selected_index(), 0);
        assert_eq!(selection.selected().map(|f| f.filename.as_str()), Some("a.rs"));
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut selection = three_files();

        assert!(selection.select(1));
        assert_eq!(selection.selected_index(), 1);
        assert!(!selection.select(10));
        assert_eq!(selection.selected_index(), 1);
    }

    #[test]
    fn test_select_next_stops_at_last_file() {
        let mut selection = three_files();

        selection.select_next();
        assert_eq!(selection.selected_index(), 1);
        selection.select_next();
        selection.select_next();
        assert_eq!(selection.selected_index(), 2);
    }

    #[test]
    fn test_select_previous_stops_at_first_file() {
        let mut selection = three_files();
        selection.select(2);

        selection.select_previous();
        assert_eq!(selection.selected_index(), 1);
        selection.select_previous();
        selection.select_previous();
        assert_eq!(selection.selected_index(), 0);
    }

    #[test]
    fn test_select_path() {
        let mut selection = three_files();

        assert!(selection.select_path("c.rs"));
        assert_eq!(selection.selected_index(), 2);
        assert!(!selection.select_path("missing.rs"));
        assert_eq!(selection.selected_index(), 2);
    }

    #[test]
    fn test_empty_selection() {
        let mut selection = FileSelection::default();

        selection.select_next();
        selection.select_previous();
        assert!(selection.is_empty());
        assert_eq!(selection.selected_index(), 0);
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_reset_selection() {
        let mut selection = three_files();
        selection.select(2);

        selection.reset();

        assert!(selection.is_empty());
        assert_eq!(selection.selected_index(), 0);
    }
}
