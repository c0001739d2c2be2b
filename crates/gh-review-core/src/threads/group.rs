//! Rebuild conversation threads from GitHub's flat review-comment list.

use crate::model::{Comment, RawComment, ReviewThread};
use log::warn;
use std::collections::{HashMap, HashSet};

/// Resolves each comment to the root of its reply chain.
///
/// Lookups are memoised for the lifetime of one grouping call.
struct RootResolver<'a> {
    by_id: HashMap<u64, &'a RawComment>,
    cache: HashMap<u64, u64>,
}

impl<'a> RootResolver<'a> {
    fn new(comments: &'a [RawComment]) -> Self {
        Self {
            by_id: comments.iter().map(|c| (c.id, c)).collect(),
            cache: HashMap::new(),
        }
    }

    /// Follow `in_reply_to_id` until a comment without a parent in this batch.
    ///
    /// The walk is capped at the batch size. A node seen twice ends it and
    /// becomes the root.
    fn resolve(&mut self, comment: &'a RawComment) -> u64 {
        if let Some(&root) = self.cache.get(&comment.id) {
            return root;
        }

        let mut visited = HashSet::from([comment.id]);
        let mut current = comment;
        let mut root = comment.id;

        for _ in 0..=self.by_id.len() {
            let Some(parent) = current
                .in_reply_to_id
                .and_then(|parent_id| self.by_id.get(&parent_id).copied())
            else {
                root = current.id;
                break;
            };

            if !visited.insert(parent.id) {
                warn!(
                    "Reply cycle detected at comment {} while resolving {}",
                    parent.id, comment.id
                );
                root = parent.id;
                break;
            }
            current = parent;
            root = current.id;
        }

        self.cache.insert(comment.id, root);
        root
    }
}

/// Group raw review comments into threads keyed by their root comment.
///
/// Threads appear in the order their first comment appears in the input,
/// and take their `(path, line, side)` anchor from that comment. Comments
/// within a thread are sorted by creation time. Every input comment ends up
/// in exactly one thread.
pub fn group_into_threads(comments: &[RawComment]) -> Vec<ReviewThread> {
    let mut resolver = RootResolver::new(comments);
    let mut threads: Vec<ReviewThread> = Vec::new();
    let mut thread_for_root: HashMap<u64, usize> = HashMap::new();

    for raw in comments {
        let root_id = resolver.resolve(raw);
        let comment = Comment::from_raw(raw);

        match thread_for_root.get(&root_id) {
            Some(&index) => threads[index].comments.push(comment),
            None => {
                thread_for_root.insert(root_id, threads.len());
                threads.push(ReviewThread {
                    id: root_id.to_string(),
                    path: raw.path.clone(),
                    line: raw.line.unwrap_or(0),
                    side: raw.side,
                    comments: vec![comment],
                    is_resolved: false,
                });
            }
        }
    }

    for thread in &mut threads {
        thread.comments.sort_by_key(|c| c.created_at);
    }

    threads
}
