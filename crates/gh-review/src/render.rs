//! Plain-text rendering of a pull request and its annotated diff.

use gh_client::PullRequest;
use gh_review_core::{DiffLine, FileChange, LineKind, ReviewThread, ThreadIndex};
use std::fmt::Write;

/// Title line, branches, link and size of the pull request.
///
/// ```text
/// #42 Fix login redirect [open] octocat
/// fix/login → main
/// https://github.com/octo/app/pull/42
/// +12 -3 in 2 files
/// ```
pub fn header(pr: &PullRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {} [{}] {}", pr.number, pr.title, pr.state, pr.author);
    let _ = writeln!(out, "{} → {}", pr.head_branch, pr.base_branch);
    let _ = writeln!(out, "{}", pr.html_url);
    let _ = write!(
        out,
        "+{} -{} in {} {}",
        pr.additions,
        pr.deletions,
        pr.changed_files,
        if pr.changed_files == 1 { "file" } else { "files" }
    );
    out
}

/// The markdown body as written, or a placeholder when it is blank.
pub fn description(pr: &PullRequest) -> String {
    match pr.body.as_deref().map(str::trim) {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => "No description provided.".to_string(),
    }
}

/// One file's diff with the threads anchored under their lines.
pub fn file(file: &FileChange, threads: &[ReviewThread], show_resolved: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({}, +{} -{})",
        file.status.as_char(),
        file.display_name(),
        file.language(),
        file.additions,
        file.deletions
    );

    if !file.has_patch() {
        out.push_str("    (no textual diff)\n");
        return out;
    }

    let index = ThreadIndex::build(threads, &file.filename);
    for line in file.diff_lines() {
        out.push_str(&diff_line(&line));
        out.push('\n');

        for thread in index.threads_for_line(&line) {
            if thread.is_resolved && !show_resolved {
                continue;
            }
            out.push_str(&thread_block(thread));
        }
    }

    out
}

fn number(n: Option<u32>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

fn diff_line(line: &DiffLine) -> String {
    match line.kind {
        LineKind::Header => line.content.clone(),
        LineKind::Addition | LineKind::Deletion | LineKind::Context => format!(
            "{:>5} {:>5} {}{}",
            number(line.old_line),
            number(line.new_line),
            line.kind.prefix(),
            line.content
        ),
    }
}

fn thread_block(thread: &ReviewThread) -> String {
    let mut out = String::new();
    let state = if thread.is_resolved { " [resolved]" } else { "" };
    let _ = writeln!(out, "            ┌─ {}{}", thread.anchor(), state);

    for comment in &thread.comments {
        let pending = if comment.is_pending { " (pending)" } else { "" };
        let _ = writeln!(
            out,
            "            │ {} {}{}",
            comment.author.login,
            comment.created_at.format("%Y-%m-%d %H:%M"),
            pending
        );
        for body_line in comment.body.lines() {
            let _ = writeln!(out, "            │   {}", body_line);
        }
    }

    out.push_str("            └─\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gh_client::ReviewState;
    use gh_review_core::{DiffSide, NewComment, ThreadStore};
    use pretty_assertions::assert_eq;

    fn sample_pr(body: Option<&str>) -> PullRequest {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        PullRequest {
            number: 7,
            title: "Add retry budget".to_string(),
            body: body.map(str::to_string),
            author: "octocat".to_string(),
            state: ReviewState::Open,
            head_sha: "abc123".to_string(),
            base_branch: "main".to_string(),
            head_branch: "feature/retry".to_string(),
            created_at: at,
            updated_at: at,
            html_url: "https://github.com/octo/app/pull/7".to_string(),
            additions: 40,
            deletions: 5,
            changed_files: 3,
        }
    }

    #[test]
    fn test_header_shows_branches_link_and_size() {
        let out = header(&sample_pr(None));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec![
                "#7 Add retry budget [open] octocat",
                "feature/retry → main",
                "https://github.com/octo/app/pull/7",
                "+40 -5 in 3 files",
            ]
        );
    }

    #[test]
    fn test_header_single_file() {
        let mut pr = sample_pr(None);
        pr.changed_files = 1;
        assert!(header(&pr).ends_with("in 1 file"));
    }

    #[test]
    fn test_description_markdown_kept() {
        let pr = sample_pr(Some("## Why\n\nRetries were unbounded.\n"));
        assert_eq!(description(&pr), "## Why\n\nRetries were unbounded.");
    }

    #[test]
    fn test_description_placeholder_when_blank() {
        assert_eq!(description(&sample_pr(None)), "No description provided.");
        assert_eq!(description(&sample_pr(Some(""))), "No description provided.");
        assert_eq!(description(&sample_pr(Some("  \n "))), "No description provided.");
    }

    fn sample_file() -> FileChange {
        let mut file = FileChange::new("src/lib.rs", "@@ -1,2 +1,2 @@\n-old\n+new\n same");
        file.additions = 1;
        file.deletions = 1;
        file
    }

    #[test]
    fn test_diff_line_columns() {
        assert_eq!(diff_line(&DiffLine::addition("x", 12)), "         12 +x");
        assert_eq!(diff_line(&DiffLine::deletion("y", 3)), "    3       -y");
        assert_eq!(diff_line(&DiffLine::context("z", 4, 5)), "    4     5  z");
        assert_eq!(diff_line(&DiffLine::header("@@ -1 +1 @@")), "@@ -1 +1 @@");
    }

    #[test]
    fn test_file_without_threads() {
        let out = file(&sample_file(), &[], true);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec![
                "M src/lib.rs (rust, +1 -1)",
                "@@ -1,2 +1,2 @@",
                "    1       -old",
                "          1 +new",
                "    2     2  same",
            ]
        );
    }

    #[test]
    fn test_thread_printed_under_its_line() {
        let mut store = ThreadStore::new();
        store.add_comment(NewComment::new("src/lib.rs", 1, DiffSide::Right, "why?", Some(2)));

        let out = file(&sample_file(), store.threads(), true);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[3], "          1 +new");
        assert_eq!(lines[4], "            ┌─ 1-RIGHT");
        assert!(lines[5].starts_with("            │ you "));
        assert!(lines[5].ends_with("(pending)"));
        assert_eq!(lines[6], "            │   why?");
        assert_eq!(lines[7], "            └─");
    }

    #[test]
    fn test_resolved_threads_hidden_on_request() {
        let mut store = ThreadStore::new();
        let id = store.add_comment(NewComment::new("src/lib.rs", 1, DiffSide::Left, "gone", None));
        store.toggle_resolved(&id);

        assert!(!file(&sample_file(), store.threads(), false).contains("gone"));
        assert!(file(&sample_file(), store.threads(), true).contains("1-LEFT [resolved]"));
    }

    #[test]
    fn test_file_without_patch() {
        let out = file(&FileChange::new("logo.png", ""), &[], true);
        assert!(out.ends_with("(no textual diff)\n"));
    }
}
