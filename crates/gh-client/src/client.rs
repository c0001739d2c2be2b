//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{PullRequest, PullRequestFile, ReviewComment};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read side of the GitHub API a review needs.
/// Implementations can hit the API directly or serve fixtures in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, ReviewComment};
///
/// async fn comments(client: &dyn GitHubClient) -> anyhow::Result<Vec<ReviewComment>> {
///     client.fetch_review_comments("rust-lang", "rust", 1234).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request details, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest>;

    /// Fetch the files changed by a pull request, with their patches
    ///
    /// Follows pagination until the last page. Files whose diff is too
    /// large or binary come back without a patch.
    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<PullRequestFile>>;

    /// Fetch review comments for a pull request
    ///
    /// Returns all review comments (line comments) on a PR in the order
    /// GitHub lists them, following pagination.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    async fn fetch_review_comments(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ReviewComment>>;
}
