//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from the review domain model
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR body/description
    pub body: Option<String>,

    /// Author's GitHub username
    pub author: String,

    /// Open, closed, merged or draft
    pub state: ReviewState,

    /// HEAD commit SHA
    pub head_sha: String,

    /// Base branch name (e.g., "main")
    pub base_branch: String,

    /// HEAD branch name (e.g., "feature/foo")
    pub head_branch: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,

    /// PR URL for opening in browser
    pub html_url: String,

    /// Number of lines added
    pub additions: u64,

    /// Number of lines deleted
    pub deletions: u64,

    /// Number of files touched
    pub changed_files: u64,
}

/// Lifecycle state of a pull request as shown to a reviewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    #[default]
    Open,
    Closed,
    Merged,
    Draft,
}

impl ReviewState {
    /// Derive the state from the API flags. Draft wins over merged, merged
    /// wins over the open/closed state.
    pub fn from_flags(closed: bool, draft: bool, merged: bool) -> Self {
        if draft {
            ReviewState::Draft
        } else if merged {
            ReviewState::Merged
        } else if closed {
            ReviewState::Closed
        } else {
            ReviewState::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewState::Open => "open",
            ReviewState::Closed => "closed",
            ReviewState::Merged => "merged",
            ReviewState::Draft => "draft",
        }
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file changed by a pull request
/// (`GET /repos/{owner}/{repo}/pulls/{number}/files`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    /// `added`, `removed`, `modified`, `renamed`, `copied`, `changed` or `unchanged`
    pub status: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub changes: u64,
    /// Absent for binary files and very large diffs
    #[serde(default)]
    pub patch: Option<String>,
    #[serde(default)]
    pub previous_filename: Option<String>,
}

/// A GitHub user as embedded in API payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// A review comment on a specific line of a PR
/// (`GET /repos/{owner}/{repo}/pulls/{number}/comments`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// GitHub comment ID
    pub id: u64,
    /// Comment body text
    pub body: String,
    /// Comment author
    pub user: User,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated
    pub updated_at: DateTime<Utc>,
    /// File path the comment is on
    pub path: String,
    /// Line in the image selected by `side`; null once the line is outdated
    #[serde(default)]
    pub line: Option<u32>,
    /// Line the comment was originally made on
    #[serde(default)]
    pub original_line: Option<u32>,
    /// Which side of the diff: "LEFT" (deletions) or "RIGHT" (additions)
    #[serde(default)]
    pub side: Option<String>,
    /// Diff-relative position; null once the line is outdated
    #[serde(default)]
    pub position: Option<u32>,
    /// ID of the comment this one replies to
    #[serde(default)]
    pub in_reply_to_id: Option<u64>,
}
