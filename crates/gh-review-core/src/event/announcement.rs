//! Live-region announcements for assistive technology.

use std::fmt;

/// Announced after a successful local mutation of the thread set.
///
/// The rendered strings are part of the presentation contract and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    CommentPosted,
    ReplyPosted,
    CommentUpdated,
    CommentDeleted,
}

impl Announcement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Announcement::CommentPosted => "Comment posted.",
            Announcement::ReplyPosted => "Reply posted.",
            Announcement::CommentUpdated => "Comment updated.",
            Announcement::CommentDeleted => "Comment deleted.",
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_strings() {
        assert_eq!(Announcement::CommentPosted.to_string(), "Comment posted.");
        assert_eq!(Announcement::ReplyPosted.to_string(), "Reply posted.");
        assert_eq!(Announcement::CommentUpdated.to_string(), "Comment updated.");
        assert_eq!(Announcement::CommentDeleted.to_string(), "Comment deleted.");
    }
}
