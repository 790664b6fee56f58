//! Recent preview changes, newest first.

use std::collections::VecDeque;

use time::OffsetDateTime;

use crate::core::timing;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeHistoryEntry {
    pub text: String,
    /// `HH:MM` display label.
    pub time: String,
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeHistory {
    entries: VecDeque<ChangeHistoryEntry>,
    capacity: usize,
}

impl Default for ChangeHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ChangeHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.push_at(text, timing::local_now());
    }

    pub fn push_at(&mut self, text: impl Into<String>, timestamp: OffsetDateTime) {
        self.entries.push_front(ChangeHistoryEntry {
            text: text.into(),
            time: timing::format_clock(timestamp),
            timestamp,
        });
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ChangeHistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
