//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.

use crate::client::GitHubClient;
use crate::types::{PullRequest, PullRequestFile, ReviewComment, ReviewState};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// GitHub's maximum page size for list endpoints
const PER_PAGE: u8 = 100;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// GET every page of a list endpoint.
    ///
    /// Uses raw requests so the payload keeps GitHub's exact shape.
    async fn get_all_pages<T: DeserializeOwned>(&self, route: &str) -> anyhow::Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let params = PageParams {
                per_page: PER_PAGE,
                page,
            };
            let batch: Vec<T> = self.octocrab.get(route, Some(&params)).await?;
            let last_page = batch.len() < usize::from(PER_PAGE);
            items.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest> {
        debug!("Fetching PR #{} for {}/{}", pr_number, owner, repo);

        let pr = self
            .octocrab
            .pulls(owner, repo)
            .get(pr_number)
            .await
            .with_context(|| format!("Failed to fetch {}/{}#{}", owner, repo, pr_number))?;

        Ok(convert_pull_request(&pr))
    }

    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<PullRequestFile>> {
        debug!("Fetching files of PR #{} for {}/{}", pr_number, owner, repo);

        let route = format!("/repos/{}/{}/pulls/{}/files", owner, repo, pr_number);
        let files: Vec<PullRequestFile> = self
            .get_all_pages(&route)
            .await
            .with_context(|| format!("Failed to fetch files of {}/{}#{}", owner, repo, pr_number))?;

        debug!("Fetched {} files for {}/{}#{}", files.len(), owner, repo, pr_number);
        Ok(files)
    }

    async fn fetch_review_comments(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<ReviewComment>> {
        debug!(
            "Fetching review comments of PR #{} for {}/{}",
            pr_number, owner, repo
        );

        let route = format!("/repos/{}/{}/pulls/{}/comments", owner, repo, pr_number);
        let comments: Vec<ReviewComment> = self.get_all_pages(&route).await.with_context(|| {
            format!(
                "Failed to fetch review comments of {}/{}#{}",
                owner, repo, pr_number
            )
        })?;

        debug!(
            "Fetched {} review comments for {}/{}#{}",
            comments.len(),
            owner,
            repo,
            pr_number
        );
        Ok(comments)
    }
}

/// HTTP status of a failed GitHub API call, if the error carries one.
pub fn status_code(err: &anyhow::Error) -> Option<u16> {
    match err.downcast_ref::<octocrab::Error>()? {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    let closed = matches!(pr.state, Some(octocrab::models::IssueState::Closed));
    let merged = pr.merged_at.is_some() || pr.merged.unwrap_or(false);

    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        body: pr.body.clone(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        state: ReviewState::from_flags(closed, pr.draft.unwrap_or(false), merged),
        head_sha: pr.head.sha.clone(),
        base_branch: pr.base.ref_field.clone(),
        head_branch: pr.head.ref_field.clone(),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        updated_at: pr.updated_at.unwrap_or_else(chrono::Utc::now),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        additions: pr.additions.unwrap_or(0),
        deletions: pr.deletions.unwrap_or(0),
        changed_files: pr.changed_files.unwrap_or(0),
    }
}
