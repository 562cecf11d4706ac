// SPDX-License-Identifier: MPL-2.0
//! Asset collection port definition.
//!
//! The collection is the single authority on selection policy. The presenter
//! asks it to select or deselect and never second-guesses the outcome.

use crate::domain::media::{Asset, MediaType};
use crate::domain::selection::{SelectMode, SelectionOrdinal};
use thiserror::Error;

// =============================================================================
// SelectionError
// =============================================================================

/// Reasons a collection refuses a selection change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No asset lives at the given index.
    #[error("no asset at index {index}")]
    NotFound {
        /// The index that failed to resolve.
        index: usize,
    },

    /// The per-media-type selection limit is already reached.
    #[error("selection limit of {limit} reached for {media_type:?}")]
    LimitReached {
        /// Kind of media that hit its limit.
        media_type: MediaType,
        /// Configured maximum.
        limit: usize,
    },

    /// Every ordinal is taken; only reachable with `u32::MAX` selections.
    #[error("selection ordinals exhausted")]
    OrdinalsExhausted,
}

// =============================================================================
// SelectOutcome
// =============================================================================

/// What a successful `select` did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    /// Ordinal now attached to the selected asset.
    pub ordinal: SelectionOrdinal,
    /// Index of an asset whose selection was dropped to honour the policy
    /// (single-select replacement).
    pub evicted: Option<usize>,
}

// =============================================================================
// AssetCollection Trait
// =============================================================================

/// Ordered, indexable assets with per-asset selection state.
///
/// Indices are stable for the lifetime of a browsing session.
pub trait AssetCollection {
    /// Number of assets.
    fn len(&self) -> usize;

    /// Returns `true` when the collection holds no assets.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the asset at `index`, if any.
    fn asset_at(&self, index: usize) -> Option<&Asset>;

    /// Returns the index of `asset`, if it is still part of the collection.
    fn index_of(&self, asset: &Asset) -> Option<usize>;

    /// Returns the selection ordinal of the asset at `index`.
    fn selection_ordinal_of(&self, index: usize) -> Option<SelectionOrdinal>;

    /// Number of currently selected assets.
    fn selected_count(&self) -> usize;

    /// Selection policy this collection enforces.
    ///
    /// The info bar reads it to decide whether ordinals are shown, so the
    /// badge always agrees with how `select` behaves.
    fn select_mode(&self) -> SelectMode;

    /// Selects the asset at `index`, applying the collection's policy.
    ///
    /// Selecting an already selected asset returns its current ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when the index is unknown or the policy
    /// refuses the selection.
    fn select(&mut self, index: usize) -> Result<SelectOutcome, SelectionError>;

    /// Clears the selection of the asset at `index`. Other ordinals are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotFound`] when the index is unknown.
    fn deselect(&mut self, index: usize) -> Result<(), SelectionError>;
}
