//! Data models for diff lines, review comments and pull request references.

mod comment;
mod diff;
mod file;
mod pr_ref;

pub use comment::{Comment, CommentAuthor, DiffSide, NewComment, RawComment, RawUser, ReviewThread};
pub use diff::{DiffLine, LineKind};
pub use file::{FileChange, FileSelection, FileStatus};
pub use pr_ref::{InvalidPrRef, PrRef};
