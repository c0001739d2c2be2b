//! Trait for fetching the review comments of a pull request.

use crate::model::RawComment;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching review comments.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A network or API error occurred.
    #[error("{0}")]
    Network(String),

    /// The pull request was not found.
    #[error("Pull request not found")]
    NotFound,

    /// Not authorized to read the pull request.
    #[error("Access denied: {0}")]
    Unauthorized(String),

    /// The comment source is not available.
    #[error("Comment source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the flat review-comment list of a pull request.
///
/// Implement this trait to feed [`crate::ThreadStore::load`] from the
/// GitHub API, a fixture file, or any other backend.
///
/// # Example
///
/// ```ignore
/// struct FixtureSource(Vec<RawComment>);
///
/// #[async_trait]
/// impl CommentSource for FixtureSource {
///     async fn fetch_review_comments(
///         &self,
///         _owner: &str,
///         _repo: &str,
///         _number: u64,
///     ) -> Result<Vec<RawComment>, SourceError> {
///         Ok(self.0.clone())
///     }
///
///     fn is_available(&self) -> bool {
///         true
///     }
/// }
/// ```
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch every review comment on a pull request.
    ///
    /// # Arguments
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `number` - Pull request number
    async fn fetch_review_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<RawComment>, SourceError>;

    /// Check if the source is available (e.g., has valid credentials).
    fn is_available(&self) -> bool;
}

/// A source for when no backend is configured.
pub struct NoOpCommentSource;

#[async_trait]
impl CommentSource for NoOpCommentSource {
    async fn fetch_review_comments(
        &self,
        _owner: &str,
        _repo: &str,
        _number: u64,
    ) -> Result<Vec<RawComment>, SourceError> {
        Err(SourceError::Unavailable(
            "no comment backend configured".to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}
