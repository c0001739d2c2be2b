//! User-facing messages for failed pull request and file-list loads.

/// What was being loaded when a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    PullRequest,
    Files,
}

impl LoadTarget {
    fn not_found(&self) -> &'static str {
        match self {
            LoadTarget::PullRequest => "Pull request not found. Please check the URL.",
            LoadTarget::Files => "Pull request not found",
        }
    }

    fn access_denied(&self) -> &'static str {
        match self {
            LoadTarget::PullRequest => "Access denied. Please check your token permissions.",
            LoadTarget::Files => "Access denied",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            LoadTarget::PullRequest => "Failed to load pull request",
            LoadTarget::Files => "Failed to load files",
        }
    }
}

/// Message shown when loading `target` failed with HTTP `status`.
///
/// 404 and 401/403 get fixed wording. Any other failure shows `detail`,
/// or a generic line when `detail` is blank.
pub fn load_error_message(target: LoadTarget, status: Option<u16>, detail: &str) -> String {
    match status {
        Some(404) => target.not_found().to_string(),
        Some(401) | Some(403) => target.access_denied().to_string(),
        _ if detail.trim().is_empty() => target.fallback().to_string(),
        _ => detail.to_string(),
    }
}
