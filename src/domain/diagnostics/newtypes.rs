// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Journal Capacity Bounds
// =============================================================================

/// Activity journal capacity bounds (16 to 4096 events).
pub mod journal_capacity_bounds {
    /// Smallest journal worth keeping.
    pub const MIN: usize = 16;
    /// Upper bound on retained events.
    pub const MAX: usize = 4096;
    /// Default journal length for one picker session.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// JournalCapacity
// =============================================================================

/// Number of activity events the presenter keeps before evicting the oldest.
///
/// Out-of-range values are clamped rather than rejected, so a hand-edited
/// settings file can never disable the journal or make it unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalCapacity(usize);

impl JournalCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(journal_capacity_bounds::MIN, journal_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for JournalCapacity {
    fn default() -> Self {
        Self(journal_capacity_bounds::DEFAULT)
    }
}
