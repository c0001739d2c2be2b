//! Extension traits for plugging data sources into the review core.

mod comment_source;

pub use comment_source::{CommentSource, NoOpCommentSource, SourceError};
