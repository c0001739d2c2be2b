//! [`CommentSource`] backed by the GitHub REST client.

use crate::load_error::{load_error_message, LoadTarget};
use crate::model::{DiffSide, FileChange, FileStatus, RawComment, RawUser};
use crate::traits::{CommentSource, SourceError};
use async_trait::async_trait;
use gh_client::{GitHubClient, PullRequestFile, ReviewComment};
use log::debug;

/// Feeds review comments from any [`GitHubClient`] into the thread store.
pub struct GitHubCommentSource<C: GitHubClient> {
    client: C,
}

impl<C: GitHubClient> GitHubCommentSource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: GitHubClient> CommentSource for GitHubCommentSource<C> {
    async fn fetch_review_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<RawComment>, SourceError> {
        let comments = self
            .client
            .fetch_review_comments(owner, repo, number)
            .await
            .map_err(classify)?;

        debug!("Mapped {} review comments", comments.len());
        Ok(comments.into_iter().map(into_raw).collect())
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn classify(err: anyhow::Error) -> SourceError {
    match gh_client::status_code(&err) {
        Some(404) => SourceError::NotFound,
        Some(401) | Some(403) => SourceError::Unauthorized(format!("{:#}", err)),
        _ => SourceError::Network(format!("{:#}", err)),
    }
}

/// User-facing message for a failed pull request or file-list request.
pub fn describe_load_error(target: LoadTarget, err: &anyhow::Error) -> String {
    load_error_message(target, gh_client::status_code(err), &format!("{:#}", err))
}

fn into_raw(comment: ReviewComment) -> RawComment {
    let side = match comment.side.as_deref() {
        Some("LEFT") => DiffSide::Left,
        _ => DiffSide::Right,
    };

    RawComment {
        id: comment.id,
        body: comment.body,
        user: RawUser {
            id: comment.user.id,
            login: comment.user.login,
            avatar_url: comment.user.avatar_url,
        },
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        path: comment.path,
        line: comment.line,
        side,
        position: comment.position,
        in_reply_to_id: comment.in_reply_to_id,
    }
}

impl From<PullRequestFile> for FileChange {
    fn from(file: PullRequestFile) -> Self {
        Self {
            status: FileStatus::from_github_str(&file.status),
            filename: file.filename,
            additions: file.additions,
            deletions: file.deletions,
            changes: file.changes,
            patch: file.patch.unwrap_or_default(),
            previous_filename: file.previous_filename,
        }
    }
}
