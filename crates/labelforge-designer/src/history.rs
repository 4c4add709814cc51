//! Snapshot-based undo/redo.
//!
//! The history holds full copies of the mutable document state: pages
//! and the current page index. Documents are small (pages × elements,
//! not pixel buffers), so whole-state snapshots are cheap. No snapshot
//! is taken automatically on mutation: callers dispatch `SaveHistory` at
//! the granularity they want undo steps to have, typically once per
//! discrete user gesture rather than per drag frame.

use crate::document::Page;

/// One immutable copy of the mutable document state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub pages: Vec<Page>,
    pub current_page: usize,
}

impl Snapshot {
    pub fn new(pages: Vec<Page>, current_page: usize) -> Self {
        Self {
            pages,
            current_page,
        }
    }
}

/// Ordered snapshot list plus a cursor.
///
/// `cursor` is `None` while the history is empty, otherwise it indexes
/// the entry matching the live state. Saving after an undo discards the
/// abandoned redo branch. Depth is bounded: past `max_depth` entries the
/// oldest snapshot is evicted.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
    max_depth: usize,
}

impl History {
    /// Creates an empty history bounded to `max_depth` snapshots.
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_depth: max_depth.max(1),
        }
    }

    /// Records a snapshot: truncates any entries after the cursor,
    /// appends, and moves the cursor to the new last entry.
    pub fn save(&mut self, snapshot: Snapshot) {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }
        self.entries.push(snapshot);
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps the cursor back and returns the snapshot to restore.
    /// `None` at the boundary (cursor at 0 or empty history).
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Steps the cursor forward and returns the snapshot to restore.
    /// `None` at the boundary (cursor at the last entry).
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Number of snapshots behind the cursor.
    pub fn undo_depth(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Number of snapshots ahead of the cursor.
    pub fn redo_depth(&self) -> usize {
        match self.cursor {
            Some(c) => self.entries.len() - 1 - c,
            None => 0,
        }
    }

    /// Total snapshots retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all snapshots.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
