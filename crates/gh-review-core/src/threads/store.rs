//! Client-side state container for review threads.

use super::clock::{Clock, SystemClock};
use super::group::group_into_threads;
use super::ids::{IdGenerator, UuidGenerator};
use crate::event::Announcement;
use crate::model::{Comment, CommentAuthor, NewComment, RawComment, ReviewThread};
use crate::traits::{CommentSource, SourceError};
use chrono::Duration;
use log::{debug, info, warn};
use std::fmt;

/// Holds the active review threads of one pull request and applies local
/// edits to them.
///
/// All mutation goes through `&mut self`; the store is owned by the UI loop.
/// Local edits are optimistic and never sent anywhere by the store itself.
pub struct ThreadStore {
    threads: Vec<ReviewThread>,
    is_loading: bool,
    error: Option<String>,
    announcement: Option<Announcement>,
    current_user: CommentAuthor,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    /// Bumped on every change to `threads`.
    revision: u64,
}

impl Default for ThreadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThreadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadStore")
            .field("threads", &self.threads)
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .field("announcement", &self.announcement)
            .field("current_user", &self.current_user)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl ThreadStore {
    /// Create an empty store with random ids and wall-clock time.
    pub fn new() -> Self {
        Self {
            threads: Vec::new(),
            is_loading: false,
            error: None,
            announcement: None,
            current_user: CommentAuthor::local_user(),
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
            revision: 0,
        }
    }

    /// Author used for comments created through this store.
    pub fn with_current_user(mut self, user: CommentAuthor) -> Self {
        self.current_user = user;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // === Accessors ===

    pub fn threads(&self) -> &[ReviewThread] {
        &self.threads
    }

    pub fn thread(&self, thread_id: &str) -> Option<&ReviewThread> {
        self.threads.iter().find(|t| t.id == thread_id)
    }

    /// Find a comment by id across all threads.
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.threads
            .iter()
            .flat_map(|t| t.comments.iter())
            .find(|c| c.id == comment_id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Descriptive message from the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Live-region text for the last successful edit.
    pub fn announcement(&self) -> Option<Announcement> {
        self.announcement
    }

    pub fn current_user(&self) -> &CommentAuthor {
        &self.current_user
    }

    /// Changes whenever the thread set changes; derived views compare it to
    /// decide whether to recompute.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear_announcement(&mut self) {
        self.announcement = None;
    }

    /// Drop all threads and transient state.
    pub fn reset(&mut self) {
        self.threads.clear();
        self.is_loading = false;
        self.error = None;
        self.announcement = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn announce(&mut self, announcement: Announcement) {
        self.announcement = Some(announcement);
    }

    // === Loading ===

    /// Fetch the comments of a pull request and rebuild the thread set.
    ///
    /// On failure the thread set is left empty and [`Self::error`] holds
    /// `"Unable to load comments for pull request #<N> in <owner>/<repo>: <detail>"`.
    /// A source that reports itself unavailable is not queried.
    pub async fn load(&mut self, source: &dyn CommentSource, owner: &str, repo: &str, number: u64) {
        self.start_load();
        let result = if source.is_available() {
            source.fetch_review_comments(owner, repo, number).await
        } else {
            Err(SourceError::Unavailable("not configured".to_string()))
        };
        self.finish_load(owner, repo, number, result);
    }

    /// Mark a load as in flight. Pair with [`Self::finish_load`] when the
    /// fetch is driven outside the store.
    pub fn start_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Apply the outcome of a comment fetch.
    pub fn finish_load(
        &mut self,
        owner: &str,
        repo: &str,
        number: u64,
        result: Result<Vec<RawComment>, SourceError>,
    ) {
        match result {
            Ok(comments) => {
                self.set_threads_from_raw(&comments);
                info!(
                    "Loaded {} comments in {} threads for {}/{}#{}",
                    comments.len(),
                    self.threads.len(),
                    owner,
                    repo,
                    number
                );
            }
            Err(err) => {
                let message = format!(
                    "Unable to load comments for pull request #{} in {}/{}: {}",
                    number, owner, repo, err
                );
                warn!("{}", message);
                self.threads.clear();
                self.error = Some(message);
                self.touch();
            }
        }
        self.is_loading = false;
    }

    /// Replace the thread set with threads rebuilt from `comments`.
    pub fn set_threads_from_raw(&mut self, comments: &[RawComment]) {
        self.threads = group_into_threads(comments);
        self.touch();
    }

    // === Local edits ===

    /// Post a comment on `(path, line, side)`, joining the thread already
    /// anchored there or starting a new one. Returns the new comment id.
    pub fn add_comment(&mut self, new: NewComment) -> String {
        let now = self.clock.now();
        let existing = self
            .threads
            .iter()
            .position(|t| t.is_anchored_at(&new.path, new.line, new.side));

        let comment = Comment {
            id: self.ids.next_id(),
            body: new.body,
            author: self.current_user.clone(),
            created_at: now,
            updated_at: now,
            path: new.path,
            line: new.line,
            side: new.side,
            position: new.position,
            in_reply_to: None,
            is_pending: true,
        };
        let comment_id = comment.id.clone();

        match existing {
            Some(index) => {
                debug!(
                    "Appending comment {} to thread {}",
                    comment_id, self.threads[index].id
                );
                self.threads[index].comments.push(comment);
            }
            None => {
                debug!(
                    "Starting thread {} at {}:{} ({})",
                    comment_id, comment.path, comment.line, comment.side
                );
                self.threads.push(ReviewThread::seeded(comment));
            }
        }

        self.touch();
        self.announce(Announcement::CommentPosted);
        comment_id
    }

    /// Reply to a thread. The reply points at the thread's current last
    /// comment. Returns the new comment id, or `None` if the thread is unknown.
    pub fn add_reply(&mut self, thread_id: &str, body: impl Into<String>) -> Option<String> {
        let now = self.clock.now();
        let Some(thread) = self.threads.iter_mut().find(|t| t.id == thread_id) else {
            debug!("Reply to unknown thread {} ignored", thread_id);
            return None;
        };

        let last = thread.last_comment();
        let comment = Comment {
            id: self.ids.next_id(),
            body: body.into(),
            author: self.current_user.clone(),
            created_at: now,
            updated_at: now,
            path: thread.path.clone(),
            line: thread.line,
            side: thread.side,
            position: last.and_then(|c| c.position),
            in_reply_to: last.map(|c| c.id.clone()),
            is_pending: true,
        };
        let comment_id = comment.id.clone();
        debug!("Reply {} added to thread {}", comment_id, thread.id);
        thread.comments.push(comment);

        self.touch();
        self.announce(Announcement::ReplyPosted);
        Some(comment_id)
    }

    /// Replace a comment's body. `updated_at` always moves forward, even
    /// when the clock has not ticked since the last change.
    pub fn edit_comment(&mut self, comment_id: &str, body: impl Into<String>) -> bool {
        let now = self.clock.now();
        let Some(comment) = self
            .threads
            .iter_mut()
            .flat_map(|t| t.comments.iter_mut())
            .find(|c| c.id == comment_id)
        else {
            debug!("Edit of unknown comment {} ignored", comment_id);
            return false;
        };

        comment.body = body.into();
        comment.updated_at = now.max(comment.updated_at + Duration::milliseconds(1));
        debug!("Comment {} edited", comment_id);

        self.touch();
        self.announce(Announcement::CommentUpdated);
        true
    }

    /// Remove a comment. A thread left without comments is removed too.
    pub fn delete_comment(&mut self, comment_id: &str) -> bool {
        let Some(thread_index) = self
            .threads
            .iter()
            .position(|t| t.comments.iter().any(|c| c.id == comment_id))
        else {
            debug!("Delete of unknown comment {} ignored", comment_id);
            return false;
        };

        let thread = &mut self.threads[thread_index];
        thread.comments.retain(|c| c.id != comment_id);
        if thread.comments.is_empty() {
            debug!("Thread {} removed with its last comment", thread.id);
            self.threads.remove(thread_index);
        }

        self.touch();
        self.announce(Announcement::CommentDeleted);
        true
    }

    /// Flip a thread's resolved flag. Local only. Returns the new state.
    pub fn toggle_resolved(&mut self, thread_id: &str) -> Option<bool> {
        let thread = self.threads.iter_mut().find(|t| t.id == thread_id)?;
        thread.is_resolved = !thread.is_resolved;
        let resolved = thread.is_resolved;

        self.touch();
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiffSide;
    use crate::test_support::{base_time, raw_comment};
    use crate::threads::{ManualClock, SequentialIdGenerator};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    fn store_with_clock() -> (ThreadStore, ManualClock) {
        let clock = ManualClock::new(base_time());
        let store = ThreadStore::new()
            .with_id_generator(SequentialIdGenerator::new("local"))
            .with_clock(clock.clone());
        (store, clock)
    }

    fn new_comment(line: u32, body: &str) -> NewComment {
        NewComment::new("a.ts", line, DiffSide::Right, body, Some(3))
    }

    struct FixedSource(Vec<RawComment>);

    #[async_trait]
    impl CommentSource for FixedSource {
        async fn fetch_review_comments(
            &self,
            _owner: &str,
            _repo: &str,
            _number: u64,
        ) -> Result<Vec<RawComment>, SourceError> {
            Ok(self.0.clone())
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CommentSource for FailingSource {
        async fn fetch_review_comments(
            &self,
            _owner: &str,
            _repo: &str,
            _number: u64,
        ) -> Result<Vec<RawComment>, SourceError> {
            Err(SourceError::Network("HTTP 502 Bad Gateway".to_string()))
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    struct OfflineSource(Vec<RawComment>);

    #[async_trait]
    impl CommentSource for OfflineSource {
        async fn fetch_review_comments(
            &self,
            _owner: &str,
            _repo: &str,
            _number: u64,
        ) -> Result<Vec<RawComment>, SourceError> {
            Ok(self.0.clone())
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_load_skips_unavailable_source() {
        let (mut store, _) = store_with_clock();
        let source = OfflineSource(vec![raw_comment(1, None, 0)]);

        store.load(&source, "octo", "repo", 9).await;

        assert!(store.threads().is_empty());
        assert!(!store.is_loading());
        assert_eq!(
            store.error(),
            Some("Unable to load comments for pull request #9 in octo/repo: Comment source unavailable: not configured")
        );
    }

    #[test]
    fn test_add_comment_on_new_line() {
        let (mut store, _) = store_with_clock();

        let id = store.add_comment(NewComment::new("a.ts", 5, DiffSide::Right, "hi", Some(3)));

        assert_eq!(store.threads().len(), 1);
        let thread = &store.threads()[0];
        assert_eq!(thread.id, id);
        assert_eq!(thread.comments.len(), 1);
        assert_eq!(thread.comments[0].body, "hi");
        assert_eq!(thread.comments[0].position, Some(3));
        assert!(thread.comments[0].is_pending);
        assert_eq!(thread.comments[0].author, CommentAuthor::local_user());
        assert_eq!(store.announcement(), Some(Announcement::CommentPosted));
        assert_eq!(store.announcement().unwrap().to_string(), "Comment posted.");
    }

    #[test]
    fn test_add_comment_joins_thread_on_same_anchor() {
        let (mut store, _) = store_with_clock();

        store.add_comment(new_comment(5, "first"));
        store.add_comment(new_comment(5, "second"));
        store.add_comment(NewComment::new("a.ts", 5, DiffSide::Left, "other side", None));
        store.add_comment(NewComment::new("b.ts", 5, DiffSide::Right, "other file", None));

        assert_eq!(store.threads().len(), 3);
        let bodies: Vec<&str> = store.threads()[0]
            .comments
            .iter()
            .map(|c| c.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[test]
    fn test_add_reply_points_at_last_comment() {
        let (mut store, clock) = store_with_clock();
        let root = store.add_comment(new_comment(5, "root"));

        clock.advance(Duration::minutes(1));
        let first = store.add_reply(&root, "first reply").unwrap();
        clock.advance(Duration::minutes(1));
        let second = store.add_reply(&root, "second reply").unwrap();

        let thread = store.thread(&root).unwrap();
        assert_eq!(thread.comments.len(), 3);
        assert_eq!(thread.comments[1].in_reply_to.as_deref(), Some(root.as_str()));
        assert_eq!(thread.comments[2].id, second);
        assert_eq!(thread.comments[2].in_reply_to.as_deref(), Some(first.as_str()));
        assert_eq!(thread.comments[2].line, 5);
        assert_eq!(thread.comments[2].position, Some(3));
        assert_eq!(store.announcement(), Some(Announcement::ReplyPosted));
    }

    #[test]
    fn test_add_reply_to_unknown_thread() {
        let (mut store, _) = store_with_clock();
        let revision = store.revision();

        assert_eq!(store.add_reply("nope", "hello"), None);
        assert_eq!(store.announcement(), None);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_edit_comment_advances_updated_at_within_same_tick() {
        let (mut store, _) = store_with_clock();
        let id = store.add_comment(new_comment(5, "draft"));
        let created = store.comment(&id).unwrap().updated_at;

        assert!(store.edit_comment(&id, "v2"));
        let after_first = store.comment(&id).unwrap().updated_at;
        assert!(store.edit_comment(&id, "v3"));
        let after_second = store.comment(&id).unwrap().updated_at;

        assert!(after_first > created);
        assert!(after_second > after_first);
        assert_eq!(store.comment(&id).unwrap().body, "v3");
        assert_eq!(store.announcement(), Some(Announcement::CommentUpdated));
    }

    #[test]
    fn test_edit_comment_uses_clock_when_it_moved() {
        let (mut store, clock) = store_with_clock();
        let id = store.add_comment(new_comment(5, "draft"));

        clock.advance(Duration::hours(2));
        store.edit_comment(&id, "later");

        assert_eq!(
            store.comment(&id).unwrap().updated_at,
            base_time() + Duration::hours(2)
        );
    }

    #[test]
    fn test_edit_unknown_comment() {
        let (mut store, _) = store_with_clock();
        assert!(!store.edit_comment("missing", "x"));
        assert_eq!(store.announcement(), None);
    }

    #[test]
    fn test_delete_last_comment_removes_thread() {
        let (mut store, _) = store_with_clock();
        let id = store.add_comment(new_comment(5, "only"));

        assert!(store.delete_comment(&id));

        assert!(store.threads().is_empty());
        assert_eq!(store.announcement(), Some(Announcement::CommentDeleted));
    }

    #[test]
    fn test_delete_reply_keeps_thread() {
        let (mut store, _) = store_with_clock();
        let root = store.add_comment(new_comment(5, "root"));
        let reply = store.add_reply(&root, "reply").unwrap();

        assert!(store.delete_comment(&reply));

        let thread = store.thread(&root).unwrap();
        assert_eq!(thread.comments.len(), 1);
        assert_eq!(thread.comments[0].id, root);
    }

    #[test]
    fn test_delete_root_keeps_replies_under_original_thread_id() {
        let (mut store, _) = store_with_clock();
        let root = store.add_comment(new_comment(5, "root"));
        store.add_reply(&root, "reply").unwrap();

        store.delete_comment(&root);

        let thread = store.thread(&root).unwrap();
        assert_eq!(thread.comments.len(), 1);
        assert_eq!(thread.comments[0].body, "reply");
    }

    #[test]
    fn test_delete_unknown_comment() {
        let (mut store, _) = store_with_clock();
        store.add_comment(new_comment(5, "keep"));
        store.clear_announcement();

        assert!(!store.delete_comment("missing"));
        assert_eq!(store.threads().len(), 1);
        assert_eq!(store.announcement(), None);
    }

    #[test]
    fn test_toggle_resolved_is_silent() {
        let (mut store, _) = store_with_clock();
        let id = store.add_comment(new_comment(5, "x"));
        store.clear_announcement();

        assert_eq!(store.toggle_resolved(&id), Some(true));
        assert!(store.thread(&id).unwrap().is_resolved);
        assert_eq!(store.toggle_resolved(&id), Some(false));
        assert_eq!(store.toggle_resolved("missing"), None);
        assert_eq!(store.announcement(), None);
    }

    #[test]
    fn test_no_empty_threads_after_mixed_edits() {
        let (mut store, clock) = store_with_clock();
        let mut comment_ids = Vec::new();

        for step in 0..12u32 {
            clock.advance(Duration::seconds(1));
            match step % 4 {
                0 | 1 => comment_ids.push(store.add_comment(new_comment(step % 3, "c"))),
                2 => {
                    let thread_id = store.threads()[0].id.clone();
                    comment_ids.push(store.add_reply(&thread_id, "r").unwrap());
                }
                _ => {
                    let victim = comment_ids.remove(0);
                    store.delete_comment(&victim);
                }
            }
            assert!(store.threads().iter().all(|t| !t.comments.is_empty()));
        }

        for id in comment_ids {
            store.delete_comment(&id);
            assert!(store.threads().iter().all(|t| !t.comments.is_empty()));
        }
        assert!(store.threads().is_empty());
    }

    #[test]
    fn test_revision_changes_on_mutation() {
        let (mut store, _) = store_with_clock();
        let r0 = store.revision();
        let id = store.add_comment(new_comment(1, "x"));
        let r1 = store.revision();
        store.toggle_resolved(&id);
        let r2 = store.revision();

        assert_ne!(r0, r1);
        assert_ne!(r1, r2);
    }

    #[test]
    fn test_set_threads_from_raw() {
        let (mut store, _) = store_with_clock();
        store.set_threads_from_raw(&[raw_comment(1, None, 0), raw_comment(2, Some(1), 1)]);

        assert_eq!(store.threads().len(), 1);
        assert_eq!(store.thread("1").unwrap().comments.len(), 2);
    }

    #[tokio::test]
    async fn test_load_success() {
        let (mut store, _) = store_with_clock();
        let source = FixedSource(vec![
            raw_comment(1, None, 0),
            raw_comment(2, Some(1), 1),
            raw_comment(3, None, 2),
        ]);

        store.load(&source, "owner", "repo", 7).await;

        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.threads().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_threads_empty() {
        let (mut store, _) = store_with_clock();
        store.add_comment(new_comment(5, "stale"));

        store.load(&FailingSource, "owner", "repo", 7).await;

        assert!(!store.is_loading());
        assert!(store.threads().is_empty());
        assert_eq!(
            store.error(),
            Some("Unable to load comments for pull request #7 in owner/repo: HTTP 502 Bad Gateway")
        );

        store.clear_error();
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_start_load_clears_previous_error() {
        let (mut store, _) = store_with_clock();
        store.finish_load("o", "r", 1, Err(SourceError::NotFound));
        assert!(store.error().is_some());

        store.start_load();
        assert!(store.is_loading());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_reset() {
        let (mut store, _) = store_with_clock();
        store.add_comment(new_comment(5, "x"));

        store.reset();

        assert!(store.threads().is_empty());
        assert_eq!(store.announcement(), None);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_custom_current_user() {
        let user = CommentAuthor::new("9", "reviewer", "https://example.com/r.png");
        let mut store = ThreadStore::new().with_current_user(user.clone());

        let id = store.add_comment(new_comment(1, "x"));

        assert_eq!(store.comment(&id).unwrap().author, user);
        assert_eq!(store.current_user(), &user);
    }
}
