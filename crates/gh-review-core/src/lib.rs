//! # gh-review-core
//!
//! The diff-parsing and comment-anchoring core of a GitHub pull request
//! review client.
//!
//! ## Design Principles
//!
//! This crate is designed to be **instrumented**: it receives patch text and
//! raw review comments and hands back addressable lines and conversation
//! threads, without calling external APIs itself. Fetching goes through the
//! [`CommentSource`] seam, so:
//!
//! - Parsing, grouping and anchoring are pure and testable without HTTP mocks
//! - The same core works against GitHub, a fixture file, or a local store
//!
//! ## Pipeline
//!
//! ```text
//! patch text ──► parse_patch ──► Vec<DiffLine> ─┐
//!                                               ├──► ThreadIndex / AnchorCache ──► threads per line
//! raw comments ──► group_into_threads ──► ThreadStore ┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gh_review_core::{parse_patch, group_into_threads, anchor_threads, position_for_line};
//!
//! let lines = parse_patch("@@ -1,1 +1,2 @@\n const foo = 'bar';\n+const added = true;");
//! assert_eq!(lines.len(), 3);
//! assert_eq!(position_for_line(&lines, 2), Some(2));
//!
//! let threads = group_into_threads(&[]);
//! let per_line = anchor_threads(&lines, &threads, "src/foo.ts");
//! assert!(per_line.iter().all(|t| t.is_empty()));
//! ```

pub mod anchor;
pub mod event;
#[cfg(feature = "github")]
pub mod github;
pub mod load_error;
pub mod model;
pub mod parser;
pub mod position;
pub mod threads;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use anchor::{anchor_threads, AnchorCache, AnchorKey, ThreadIndex};
pub use event::Announcement;
pub use load_error::{load_error_message, LoadTarget};
pub use model::{
    Comment, CommentAuthor, DiffLine, DiffSide, FileChange, FileSelection, FileStatus, InvalidPrRef,
    LineKind,
    NewComment, PrRef, RawComment, RawUser, ReviewThread,
};
pub use parser::{detect_language, parse_patch};
pub use position::{comment_target, line_index_for_position, position_for_line, CommentTarget};
pub use threads::{
    group_into_threads, Clock, IdGenerator, ManualClock, SequentialIdGenerator, SystemClock,
    ThreadStore, UuidGenerator,
};
pub use traits::{CommentSource, NoOpCommentSource, SourceError};
