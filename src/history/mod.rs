//! Linear undo/redo timeline over document snapshots.

use crate::graph::GraphDocument;
use std::sync::Arc;
use tracing::debug;

/// An immutable snapshot of the whole document at one point in time.
pub type HistoryEntry = Arc<GraphDocument>;

/// An ordered sequence of snapshots plus a cursor to the one on display.
///
/// The timeline starts empty. Every [`History::record`] discards the entries
/// after the cursor, appends the new snapshot and moves the cursor onto it.
/// [`History::undo`] and [`History::redo`] only move the cursor, so undone
/// entries stay reachable until the next record.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    max_entries: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timeline that keeps at most `max_entries` snapshots, dropping the
    /// oldest first. A capacity of zero is treated as one.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries.max(1)),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the displayed entry, `None` while the timeline is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Appends `document` at the cursor and returns the stored snapshot.
    pub fn record(&mut self, document: GraphDocument) -> HistoryEntry {
        let keep = self.cursor.map_or(0, |c| c + 1);
        let discarded = self.entries.len() - keep;
        self.entries.truncate(keep);

        let entry = Arc::new(document);
        self.entries.push(Arc::clone(&entry));

        if let Some(limit) = self.max_entries {
            if self.entries.len() > limit {
                let overflow = self.entries.len() - limit;
                self.entries.drain(..overflow);
            }
        }

        let cursor = self.entries.len() - 1;
        self.cursor = Some(cursor);
        debug!(cursor, len = self.entries.len(), discarded, "recorded history entry");
        entry
    }

    /// Steps back one entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                debug!(cursor = c - 1, len = self.entries.len(), "undo");
                true
            }
            _ => false,
        }
    }

    /// Steps forward one entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                debug!(cursor = c + 1, len = self.entries.len(), "redo");
                true
            }
            _ => false,
        }
    }

    /// Drops every entry, returning to the initial empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
