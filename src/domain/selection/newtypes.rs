// SPDX-License-Identifier: MPL-2.0
//! Selection newtypes.
//!
//! This module provides type-safe wrappers for selection values,
//! ensuring they are always within valid ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

// =============================================================================
// SelectMode
// =============================================================================

/// Whether the picker allows one or many selected assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// At most one asset is selected; picking another replaces it.
    Single,
    /// Any number of assets, each tagged with its selection order.
    #[default]
    Multiple,
}

impl SelectMode {
    /// Returns whether the ordinal should be rendered next to the badge.
    #[must_use]
    pub fn shows_ordinal(self) -> bool {
        matches!(self, SelectMode::Multiple)
    }
}

// =============================================================================
// SelectionOrdinal
// =============================================================================

/// 1-based position of an asset in the order of selection.
///
/// Zero is unrepresentable, so "unselected" is always `Option::None`
/// rather than a sentinel value.
///
/// # Example
///
/// ```
/// use photo_presenter::domain::selection::SelectionOrdinal;
///
/// let first = SelectionOrdinal::FIRST;
/// assert_eq!(first.value(), 1);
/// assert_eq!(first.to_string(), "1");
/// assert!(SelectionOrdinal::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionOrdinal(NonZeroU32);

impl SelectionOrdinal {
    /// The ordinal handed to the first selection.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates an ordinal, returning `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the raw 1-based value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0.get()
    }

    /// Returns the following ordinal, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for SelectionOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_rejects_zero() {
        assert!(SelectionOrdinal::new(0).is_none());
        assert_eq!(SelectionOrdinal::new(3).map(SelectionOrdinal::value), Some(3));
    }

    #[test]
    fn ordinal_next_increments() {
        let second = SelectionOrdinal::FIRST.next();
        assert_eq!(second.map(SelectionOrdinal::value), Some(2));
    }

    #[test]
    fn ordinal_next_saturates_to_none() {
        let last = SelectionOrdinal::new(u32::MAX).expect("non-zero");
        assert!(last.next().is_none());
    }

    #[test]
    fn only_multiple_mode_shows_ordinal() {
        assert!(SelectMode::Multiple.shows_ordinal());
        assert!(!SelectMode::Single.shows_ordinal());
    }

    #[test]
    fn select_mode_round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: SelectMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: SelectMode::Single,
        })
        .expect("serialization should succeed");
        assert_eq!(text.trim(), "mode = \"single\"");
    }
}
