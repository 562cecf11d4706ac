// SPDX-License-Identifier: MPL-2.0
//! Bounded activity journal.
//!
//! Keeps the most recent presenter events in chronological order and drops
//! the oldest once full.

use std::collections::VecDeque;

use super::events::{ActivityEvent, ActivityKind};
use crate::domain::diagnostics::JournalCapacity;

/// Ring buffer of [`ActivityEvent`]s.
///
/// # Example
///
/// ```
/// use photo_presenter::diagnostics::{ActivityJournal, ActivityKind};
/// use photo_presenter::domain::diagnostics::JournalCapacity;
///
/// let mut journal = ActivityJournal::new(JournalCapacity::default());
/// journal.record(ActivityKind::Moved { index: 1 });
/// journal.record(ActivityKind::Closed);
///
/// let kinds: Vec<_> = journal.kinds().cloned().collect();
/// assert_eq!(kinds, vec![ActivityKind::Moved { index: 1 }, ActivityKind::Closed]);
/// ```
#[derive(Debug, Clone)]
pub struct ActivityJournal {
    events: VecDeque<ActivityEvent>,
    capacity: usize,
    /// Events dropped to stay within capacity.
    evicted: u64,
}

impl ActivityJournal {
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a journal with an unclamped capacity (at least 1).
    ///
    /// Meant for tests that want to observe eviction with few events.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends an event stamped now, evicting the oldest if full.
    pub fn record(&mut self, kind: ActivityKind) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
            self.evicted += 1;
        }
        self.events.push_back(ActivityEvent::new(kind));
    }

    /// Events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter()
    }

    /// Event kinds oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &ActivityKind> {
        self.events.iter().map(|event| &event.kind)
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ActivityEvent> {
        self.events.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of events dropped since creation.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for ActivityJournal {
    fn default() -> Self {
        Self::new(JournalCapacity::default())
    }
}
