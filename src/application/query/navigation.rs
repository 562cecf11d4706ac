// SPDX-License-Identifier: MPL-2.0
//! Adjacency and cursor queries over an [`AssetCollection`].
//!
//! Everything here is read-only. Paging surfaces may call these speculatively
//! (to prefetch a neighbour) without committing to a move, so none of them
//! touches the cursor or selection state.
//!
//! Unlike the viewer's directory navigation, paging through a picker never
//! wraps: the first page has no previous page and the last has no next.

use crate::application::port::{AssetCollection, Direction};
use crate::domain::media::Asset;
use thiserror::Error;

/// Why a navigation lookup produced nothing.
///
/// None of these are fatal; callers degrade to "no page".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The asset is no longer part of the collection.
    #[error("asset is no longer in the collection")]
    NotFound,

    /// The step would leave the collection.
    #[error("index {index} is outside a collection of {len}")]
    OutOfRange {
        /// Requested index (saturated at `usize::MAX`).
        index: usize,
        /// Collection length at lookup time.
        len: usize,
    },

    /// There is nothing to navigate.
    #[error("collection is empty")]
    EmptyCollection,
}

/// Navigation state information for the host's chrome.
///
/// A snapshot; it is not updated when the presenter moves on.
// Allow excessive bools: read-only UI snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
    /// Whether the cursor is on the first page.
    pub at_first: bool,
    /// Whether the cursor is on the last page.
    pub at_last: bool,
    /// Cursor position (0-indexed), `None` for an empty collection.
    pub current_index: Option<usize>,
    /// Total number of assets.
    pub total_count: usize,
    /// Number of assets currently selected.
    pub selected_count: usize,
}

/// Returns the index adjacent to `asset` in `direction`.
///
/// # Errors
///
/// - [`NavigationError::NotFound`] if `asset` is not in the collection
/// - [`NavigationError::OutOfRange`] at either end of the collection
pub fn adjacent_index<C>(
    collection: &C,
    asset: &Asset,
    direction: Direction,
) -> Result<usize, NavigationError>
where
    C: AssetCollection + ?Sized,
{
    let index = collection
        .index_of(asset)
        .ok_or(NavigationError::NotFound)?;
    let len = collection.len();
    match direction.step(index) {
        Some(target) if target < len => Ok(target),
        Some(target) => Err(NavigationError::OutOfRange { index: target, len }),
        None => Err(NavigationError::OutOfRange {
            index: usize::MAX,
            len,
        }),
    }
}

/// Resolves the page to open first.
///
/// Falls back to index 0 when `requested` does not resolve to an asset.
///
/// # Errors
///
/// Returns [`NavigationError::EmptyCollection`] when there is nothing to show.
pub fn initial_index<C>(collection: &C, requested: usize) -> Result<usize, NavigationError>
where
    C: AssetCollection + ?Sized,
{
    if collection.asset_at(requested).is_some() {
        Ok(requested)
    } else if collection.asset_at(0).is_some() {
        Ok(0)
    } else {
        Err(NavigationError::EmptyCollection)
    }
}

/// Builds a [`NavigationInfo`] for `cursor`.
#[must_use]
pub fn navigation_info<C>(collection: &C, cursor: Option<usize>) -> NavigationInfo
where
    C: AssetCollection + ?Sized,
{
    let total_count = collection.len();
    let selected_count = collection.selected_count();
    let Some(current) = cursor.filter(|index| *index < total_count) else {
        return NavigationInfo {
            total_count,
            selected_count,
            ..NavigationInfo::default()
        };
    };
    let last = total_count - 1;

    NavigationInfo {
        has_next: current < last,
        has_previous: current > 0,
        at_first: current == 0,
        at_last: current == last,
        current_index: Some(current),
        total_count,
        selected_count,
    }
}
