//! Comment-related data structures for PR reviews.

use crate::anchor::AnchorKey;
use crate::model::LineKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the diff a comment is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffSide {
    /// Old file (deletions side).
    Left,
    /// New file (additions side).
    #[default]
    Right,
}

impl DiffSide {
    /// Convert to GitHub API string representation.
    pub fn as_github_str(&self) -> &'static str {
        match self {
            DiffSide::Left => "LEFT",
            DiffSide::Right => "RIGHT",
        }
    }

    /// The side a new comment on a line of this kind anchors to.
    pub fn for_line_kind(kind: LineKind) -> Self {
        match kind {
            LineKind::Deletion => DiffSide::Left,
            LineKind::Header | LineKind::Addition | LineKind::Context => DiffSide::Right,
        }
    }
}

impl fmt::Display for DiffSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_github_str())
    }
}

/// The user object embedded in a GitHub review comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
}

/// A review comment exactly as returned by the GitHub REST API
/// (`GET /repos/{owner}/{repo}/pulls/{number}/comments`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    pub id: u64,
    pub body: String,
    pub user: RawUser,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub path: String,
    /// `null` for comments on lines that no longer exist in the diff.
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub side: DiffSide,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub in_reply_to_id: Option<u64>,
}

/// Author of a review comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub id: String,
    pub login: String,
    pub avatar_url: String,
}

impl CommentAuthor {
    pub fn new(
        id: impl Into<String>,
        login: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            login: login.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// The author used for comments created in this client before the
    /// signed-in user is known.
    pub fn local_user() -> Self {
        Self::new(
            "local-user",
            "you",
            "https://avatars.githubusercontent.com/u/583231?v=4",
        )
    }
}

impl Default for CommentAuthor {
    fn default() -> Self {
        Self::local_user()
    }
}

impl From<&RawUser> for CommentAuthor {
    fn from(user: &RawUser) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// One review comment on a specific diff line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Server id stringified, or a generated id for local comments.
    pub id: String,
    /// Comment body (markdown).
    pub body: String,
    pub author: CommentAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// File path.
    pub path: String,
    /// 1-based line in the image selected by `side`; 0 when unknown.
    pub line: u32,
    pub side: DiffSide,
    /// Diff-relative position used when posting to GitHub.
    pub position: Option<u32>,
    /// Id of the direct parent comment.
    pub in_reply_to: Option<String>,
    /// Not yet confirmed by the server.
    pub is_pending: bool,
}

impl Comment {
    /// Map a GitHub review comment into the client model.
    pub fn from_raw(raw: &RawComment) -> Self {
        Self {
            id: raw.id.to_string(),
            body: raw.body.clone(),
            author: CommentAuthor::from(&raw.user),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            path: raw.path.clone(),
            line: raw.line.unwrap_or(0),
            side: raw.side,
            position: raw.position,
            in_reply_to: raw.in_reply_to_id.map(|id| id.to_string()),
            is_pending: false,
        }
    }
}

/// Payload for starting a new comment on a diff line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub path: String,
    pub line: u32,
    pub side: DiffSide,
    pub body: String,
    pub position: Option<u32>,
}

impl NewComment {
    pub fn new(
        path: impl Into<String>,
        line: u32,
        side: DiffSide,
        body: impl Into<String>,
        position: Option<u32>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            side,
            body: body.into(),
            position,
        }
    }
}

/// A conversation: a root comment and every reply reachable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewThread {
    /// Id of the root comment.
    pub id: String,
    pub path: String,
    pub line: u32,
    pub side: DiffSide,
    /// Sorted by `created_at` ascending. Never empty while the thread is active.
    pub comments: Vec<Comment>,
    /// Client-side only.
    pub is_resolved: bool,
}

impl ReviewThread {
    /// Start a thread anchored where `root` is.
    pub fn seeded(root: Comment) -> Self {
        Self {
            id: root.id.clone(),
            path: root.path.clone(),
            line: root.line,
            side: root.side,
            comments: vec![root],
            is_resolved: false,
        }
    }

    pub fn first_comment(&self) -> Option<&Comment> {
        self.comments.first()
    }

    pub fn last_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }

    /// The `(line, side)` key this thread attaches to.
    pub fn anchor(&self) -> AnchorKey {
        AnchorKey::new(self.line, self.side)
    }

    /// Whether this thread sits on exactly `(path, line, side)`.
    pub fn is_anchored_at(&self, path: &str, line: u32, side: DiffSide) -> bool {
        self.path == path && self.line == line && self.side == side
    }
}
