//! Bounded, deduplicated, most-recent-first clipboard history.
//!
//! The store is pure in-memory state. Persisting after a mutation and
//! notifying the UI are the application layer's job; every mutating method
//! reports what changed so the caller knows whether a flush is due.

use std::iter::Enumerate;
use std::slice;

use tracing::debug;

use super::entry::{ClipboardEntry, Fingerprint};
use crate::error::HistoryError;

/// Number of entries kept when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Whitespace-only text or an image without bytes.
    Empty,
    /// The value is already at the top of the history, or it is the last value
    /// seen before the history was cleared.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserveOutcome {
    Ignored(IgnoreReason),
    /// A new entry was added at the front; `evicted` holds entries dropped from the tail.
    Inserted { evicted: Vec<ClipboardEntry> },
    /// An existing entry moved from `from` to the front with a fresh timestamp.
    Promoted { from: usize },
}

impl ObserveOutcome {
    /// Whether the history changed and needs persisting.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ObserveOutcome::Ignored(_))
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<ClipboardEntry>,
    capacity: usize,
    last_seen: Option<Fingerprint>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            last_seen: None,
        }
    }
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        if capacity < 1 {
            return Err(HistoryError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            ..Self::default()
        })
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last_seen(&self) -> Option<Fingerprint> {
        self.last_seen
    }

    /// Replaces the history with previously persisted entries.
    ///
    /// Blank entries and later duplicates are dropped and the list is cut down
    /// to capacity, so a hand-edited or older file cannot break the invariants.
    /// The first surviving entry seeds the last-seen value. Returns how many
    /// entries were discarded.
    pub fn restore(&mut self, entries: Vec<ClipboardEntry>) -> usize {
        let offered = entries.len();
        let mut kept: Vec<ClipboardEntry> = Vec::with_capacity(offered.min(self.capacity));

        for entry in entries {
            if entry.is_blank() || kept.iter().any(|k| k.same_identity(&entry)) {
                continue;
            }
            kept.push(entry);
        }
        kept.truncate(self.capacity);

        self.last_seen = kept.first().map(ClipboardEntry::fingerprint);
        self.entries = kept;

        let discarded = offered - self.entries.len();
        if discarded > 0 {
            debug!(discarded, kept = self.entries.len(), "Discarded entries while restoring history");
        }
        discarded
    }

    /// Records a freshly captured clipboard value.
    ///
    /// A value matching the current top entry is a no-op, which keeps a polling
    /// watcher from refreshing the same entry on every tick. Otherwise any
    /// existing entry with the same identity is moved to the front (taking the
    /// candidate's fresh timestamp) and the tail is trimmed to capacity.
    pub fn observe(&mut self, candidate: ClipboardEntry) -> ObserveOutcome {
        if candidate.is_blank() {
            return ObserveOutcome::Ignored(IgnoreReason::Empty);
        }

        let fingerprint = candidate.fingerprint();
        match self.entries.first() {
            Some(top) if top.same_identity(&candidate) => {
                self.last_seen = Some(fingerprint);
                return ObserveOutcome::Ignored(IgnoreReason::Unchanged);
            }
            None if self.last_seen == Some(fingerprint) => {
                return ObserveOutcome::Ignored(IgnoreReason::Unchanged);
            }
            _ => {}
        }

        let previous = self
            .entries
            .iter()
            .position(|entry| entry.same_identity(&candidate));
        if let Some(index) = previous {
            self.entries.remove(index);
        }

        self.entries.insert(0, candidate);
        self.last_seen = Some(fingerprint);
        let evicted = self.truncate_to_capacity();

        match previous {
            Some(from) => ObserveOutcome::Promoted { from },
            None => ObserveOutcome::Inserted { evicted },
        }
    }

    /// Returns the entry at `index` without reordering anything.
    pub fn select(&self, index: usize) -> Result<&ClipboardEntry, HistoryError> {
        self.entries.get(index).ok_or(HistoryError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Empties the history and returns how many entries were removed.
    ///
    /// The last-seen value is kept so an untouched clipboard is not captured
    /// again right after clearing.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Applies a new bound and returns the entries evicted from the tail.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<Vec<ClipboardEntry>, HistoryError> {
        if capacity < 1 {
            return Err(HistoryError::InvalidCapacity(capacity));
        }
        self.capacity = capacity;
        Ok(self.truncate_to_capacity())
    }

    /// Case-insensitive substring search over entry content, in history order.
    ///
    /// The returned iterator borrows the store and can be cloned to restart it.
    pub fn search(&self, query: &str) -> Search<'_> {
        Search {
            inner: self.entries.iter().enumerate(),
            needle: query.to_lowercase(),
        }
    }

    fn truncate_to_capacity(&mut self) -> Vec<ClipboardEntry> {
        if self.entries.len() <= self.capacity {
            return Vec::new();
        }
        self.entries.split_off(self.capacity)
    }
}

/// Lazy iterator returned by [`HistoryStore::search`].
#[derive(Debug, Clone)]
pub struct Search<'a> {
    inner: Enumerate<slice::Iter<'a, ClipboardEntry>>,
    needle: String,
}

impl<'a> Search<'a> {
    /// The same matches paired with their index in the history, which is what
    /// `select` takes.
    pub fn indexed(mut self) -> impl Iterator<Item = (usize, &'a ClipboardEntry)> {
        std::iter::from_fn(move || self.next_match())
    }

    fn next_match(&mut self) -> Option<(usize, &'a ClipboardEntry)> {
        let needle = self.needle.as_str();
        self.inner
            .by_ref()
            .find(|(_, entry)| entry.matches_lowercase(needle))
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a ClipboardEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match().map(|(_, entry)| entry)
    }
}
