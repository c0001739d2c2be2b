//! Join parsed diff lines to review threads by `(line, side)`.

use crate::model::{DiffLine, DiffSide, ReviewThread};
use crate::threads::ThreadStore;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The `(line, side)` coordinate a thread attaches to.
///
/// Renders as `"<line>-<SIDE>"`, e.g. `12-RIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorKey {
    pub line: u32,
    pub side: DiffSide,
}

impl AnchorKey {
    pub fn new(line: u32, side: DiffSide) -> Self {
        Self { line, side }
    }

    /// Keys a diff line answers to: LEFT from the old number, then RIGHT
    /// from the new number.
    fn for_line(line: &DiffLine) -> impl Iterator<Item = AnchorKey> {
        let left = line.old_line.map(|n| AnchorKey::new(n, DiffSide::Left));
        let right = line.new_line.map(|n| AnchorKey::new(n, DiffSide::Right));
        left.into_iter().chain(right)
    }
}

impl fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.side)
    }
}

/// Threads of one file, grouped by anchor.
#[derive(Debug, Default)]
pub struct ThreadIndex<'a> {
    by_key: HashMap<AnchorKey, Vec<&'a ReviewThread>>,
}

impl<'a> ThreadIndex<'a> {
    /// Index the non-empty threads on `path`.
    ///
    /// Threads sharing a key are ordered by their first comment's creation
    /// time.
    pub fn build(threads: &'a [ReviewThread], path: &str) -> Self {
        let mut on_path: Vec<&'a ReviewThread> = threads
            .iter()
            .filter(|t| t.path == path && !t.comments.is_empty())
            .collect();
        on_path.sort_by_key(|t| t.first_comment().map(|c| c.created_at));

        let mut by_key: HashMap<AnchorKey, Vec<&'a ReviewThread>> = HashMap::new();
        for thread in on_path {
            by_key.entry(thread.anchor()).or_default().push(thread);
        }

        Self { by_key }
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Threads with exactly this anchor.
    pub fn threads_at(&self, key: AnchorKey) -> &[&'a ReviewThread] {
        self.by_key.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Threads shown under `line`: LEFT matches first, then RIGHT.
    pub fn threads_for_line(&self, line: &DiffLine) -> Vec<&'a ReviewThread> {
        AnchorKey::for_line(line)
            .flat_map(|key| self.threads_at(key).iter().copied())
            .collect()
    }
}

/// For each line of `lines`, the threads on `path` attached to it.
pub fn anchor_threads<'a>(
    lines: &[DiffLine],
    threads: &'a [ReviewThread],
    path: &str,
) -> Vec<Vec<&'a ReviewThread>> {
    let index = ThreadIndex::build(threads, path);
    lines.iter().map(|line| index.threads_for_line(line)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    path: String,
    revision: u64,
    fingerprint: u64,
}

/// Per-line thread ids for the displayed file, recomputed only when the
/// path, the store revision or the parsed lines change.
#[derive(Debug, Default)]
pub struct AnchorCache {
    key: Option<CacheKey>,
    per_line: Vec<Vec<String>>,
    recomputations: u64,
}

impl AnchorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread ids attached to each line of `lines`.
    pub fn get(&mut self, path: &str, lines: &[DiffLine], store: &ThreadStore) -> &[Vec<String>] {
        let key = CacheKey {
            path: path.to_string(),
            revision: store.revision(),
            fingerprint: fingerprint(lines),
        };

        if self.key.as_ref() != Some(&key) {
            debug!(
                "Recomputing anchors for {} at revision {}",
                path,
                store.revision()
            );
            self.per_line = anchor_threads(lines, store.threads(), path)
                .into_iter()
                .map(|threads| threads.into_iter().map(|t| t.id.clone()).collect())
                .collect();
            self.key = Some(key);
            self.recomputations += 1;
        }

        &self.per_line
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// How many times [`Self::get`] had to rebuild the per-line ids.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

fn fingerprint(lines: &[DiffLine]) -> u64 {
    let mut hasher = DefaultHasher::new();
    lines.hash(&mut hasher);
    hasher.finish()
}
