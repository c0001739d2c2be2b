//! Pull request references parsed from URLs or `owner/repo#number`.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Identifies one pull request on a GitHub host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

/// Returned when a string is neither a PR URL nor `owner/repo#number`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a pull request reference: {0} (expected https://github.com/<owner>/<repo>/pull/<n> or <owner>/<repo>#<n>)")]
pub struct InvalidPrRef(pub String);

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| {
        Regex::new(r"(?:https?://)?github\.com/([^/\s]+)/([^/\s]+)/pull/(\d+)").unwrap()
    })
}

fn short_regex() -> &'static Regex {
    static SHORT_REGEX: OnceLock<Regex> = OnceLock::new();
    SHORT_REGEX.get_or_init(|| Regex::new(r"^([^/\s#]+)/([^/\s#]+)#(\d+)$").unwrap())
}

impl PrRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    /// Parse a GitHub PR URL (scheme optional, trailing segments such as
    /// `/files` ignored) or the short `owner/repo#number` form.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let caps = url_regex()
            .captures(input)
            .or_else(|| short_regex().captures(input))?;

        let number = caps.get(3)?.as_str().parse().ok()?;
        Some(Self::new(caps.get(1)?.as_str(), caps.get(2)?.as_str(), number))
    }

    /// `owner/repo`
    pub fn full_repo(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl FromStr for PrRef {
    type Err = InvalidPrRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidPrRef(s.to_string()))
    }
}

impl fmt::Display for PrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
