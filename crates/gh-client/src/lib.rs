//! GitHub API client for pull request reviews
//!
//! This crate provides a trait-based GitHub API client that fetches the data
//! a review needs: pull request metadata, changed files with their patches,
//! and line review comments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_pull_request()                          │
//! │  - fetch_pull_request_files()                    │
//! │  - fetch_review_comments()                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │  one per host, via ClientManager
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//!
//! let client = OctocrabClient::new(Arc::new(octocrab));
//! let comments = client.fetch_review_comments("owner", "repo", 42).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_manager;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use client_manager::{ClientManager, TokenResolver};
pub use octocrab_client::{status_code, OctocrabClient};
pub use types::{PullRequest, PullRequestFile, ReviewComment, ReviewState, User};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
