// SPDX-License-Identifier: MPL-2.0
//! In-memory asset collection with selection bookkeeping.
//!
//! [`PhotoCollection`] is the reference [`AssetCollection`]: an ordered list
//! of assets plus a map from index to selection ordinal. It owns the
//! selection policy (single-select replacement, per-media-type limits).

use crate::application::port::{AssetCollection, SelectOutcome, SelectionError};
use crate::domain::media::{Asset, MediaType};
use crate::domain::selection::{SelectMode, SelectionOrdinal};
use std::collections::{BTreeMap, BTreeSet};

/// Per-media-type caps on simultaneous selections in multiple mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionLimits {
    /// Maximum selected images, `None` for no cap.
    pub max_images: Option<usize>,
    /// Maximum selected videos, `None` for no cap.
    pub max_videos: Option<usize>,
}

impl SelectionLimits {
    /// No caps at all.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_images: None,
            max_videos: None,
        }
    }

    /// Caps images and videos independently.
    #[must_use]
    pub const fn new(max_images: usize, max_videos: usize) -> Self {
        Self {
            max_images: Some(max_images),
            max_videos: Some(max_videos),
        }
    }

    /// Returns the cap for `media_type`.
    #[must_use]
    pub fn limit_for(&self, media_type: MediaType) -> Option<usize> {
        match media_type {
            MediaType::Image => self.max_images,
            MediaType::Video => self.max_videos,
        }
    }
}

/// Ordered assets with selection state.
#[derive(Debug, Clone)]
pub struct PhotoCollection {
    assets: Vec<Asset>,
    /// Selected indices and their ordinals.
    selections: BTreeMap<usize, SelectionOrdinal>,
    mode: SelectMode,
    limits: SelectionLimits,
}

impl PhotoCollection {
    /// Creates a collection with the given policy.
    #[must_use]
    pub fn new(assets: Vec<Asset>, mode: SelectMode, limits: SelectionLimits) -> Self {
        Self {
            assets,
            selections: BTreeMap::new(),
            mode,
            limits,
        }
    }

    /// Creates an uncapped multiple-select collection.
    #[must_use]
    pub fn multiple(assets: Vec<Asset>) -> Self {
        Self::new(assets, SelectMode::Multiple, SelectionLimits::unlimited())
    }

    /// Creates a single-select collection.
    #[must_use]
    pub fn single(assets: Vec<Asset>) -> Self {
        Self::new(assets, SelectMode::Single, SelectionLimits::unlimited())
    }

    #[must_use]
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    #[must_use]
    pub fn limits(&self) -> SelectionLimits {
        self.limits
    }

    /// Selected indices ordered by selection ordinal.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        let mut selected: Vec<(SelectionOrdinal, usize)> = self
            .selections
            .iter()
            .map(|(index, ordinal)| (*ordinal, *index))
            .collect();
        selected.sort_unstable();
        selected.into_iter().map(|(_, index)| index).collect()
    }

    /// Selected assets ordered by selection ordinal.
    pub fn selected_assets(&self) -> impl Iterator<Item = &Asset> {
        self.selected_indices()
            .into_iter()
            .filter_map(move |index| self.assets.get(index))
    }

    /// Drops every selection.
    pub fn clear_selection(&mut self) {
        self.selections.clear();
    }

    fn selected_of_type(&self, media_type: MediaType) -> usize {
        self.selections
            .keys()
            .filter_map(|index| self.assets.get(*index))
            .filter(|asset| asset.media_type() == media_type)
            .count()
    }

    /// Smallest ordinal not held by any current selection.
    fn lowest_free_ordinal(&self) -> Option<SelectionOrdinal> {
        let used: BTreeSet<SelectionOrdinal> = self.selections.values().copied().collect();
        let mut candidate = SelectionOrdinal::FIRST;
        while used.contains(&candidate) {
            candidate = candidate.next()?;
        }
        Some(candidate)
    }
}

impl AssetCollection for PhotoCollection {
    fn len(&self) -> usize {
        self.assets.len()
    }

    fn asset_at(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    fn index_of(&self, asset: &Asset) -> Option<usize> {
        self.assets.iter().position(|candidate| candidate == asset)
    }

    fn selection_ordinal_of(&self, index: usize) -> Option<SelectionOrdinal> {
        self.selections.get(&index).copied()
    }

    fn selected_count(&self) -> usize {
        self.selections.len()
    }

    fn select_mode(&self) -> SelectMode {
        self.mode
    }

    fn select(&mut self, index: usize) -> Result<SelectOutcome, SelectionError> {
        let media_type = self
            .assets
            .get(index)
            .map(Asset::media_type)
            .ok_or(SelectionError::NotFound { index })?;

        if let Some(ordinal) = self.selections.get(&index) {
            return Ok(SelectOutcome {
                ordinal: *ordinal,
                evicted: None,
            });
        }

        match self.mode {
            SelectMode::Single => {
                let evicted = self.selections.keys().next().copied();
                self.selections.clear();
                self.selections.insert(index, SelectionOrdinal::FIRST);
                Ok(SelectOutcome {
                    ordinal: SelectionOrdinal::FIRST,
                    evicted,
                })
            }
            SelectMode::Multiple => {
                if let Some(limit) = self.limits.limit_for(media_type) {
                    if self.selected_of_type(media_type) >= limit {
                        return Err(SelectionError::LimitReached { media_type, limit });
                    }
                }
                let ordinal = self
                    .lowest_free_ordinal()
                    .ok_or(SelectionError::OrdinalsExhausted)?;
                self.selections.insert(index, ordinal);
                Ok(SelectOutcome {
                    ordinal,
                    evicted: None,
                })
            }
        }
    }

    fn deselect(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.assets.len() {
            return Err(SelectionError::NotFound { index });
        }
        self.selections.remove(&index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::AssetId;

    fn images(count: u64) -> Vec<Asset> {
        (0..count)
            .map(|id| Asset::new(AssetId::new(id), MediaType::Image))
            .collect()
    }

    fn ordinal(value: u32) -> SelectionOrdinal {
        SelectionOrdinal::new(value).expect("non-zero ordinal")
    }

    #[test]
    fn select_assigns_consecutive_ordinals() {
        let mut collection = PhotoCollection::multiple(images(3));
        assert_eq!(collection.select(2).map(|o| o.ordinal), Ok(ordinal(1)));
        assert_eq!(collection.select(0).map(|o| o.ordinal), Ok(ordinal(2)));
        assert_eq!(collection.selected_indices(), vec![2, 0]);
    }

    #[test]
    fn deselect_leaves_gaps_in_ordinals() {
        let mut collection = PhotoCollection::multiple(images(3));
        for index in 0..3 {
            collection.select(index).expect("select");
        }
        collection.deselect(1).expect("deselect");

        assert_eq!(collection.selection_ordinal_of(0), Some(ordinal(1)));
        assert_eq!(collection.selection_ordinal_of(1), None);
        assert_eq!(collection.selection_ordinal_of(2), Some(ordinal(3)));
    }

    #[test]
    fn new_selection_fills_lowest_gap() {
        let mut collection = PhotoCollection::multiple(images(4));
        for index in 0..3 {
            collection.select(index).expect("select");
        }
        collection.deselect(1).expect("deselect");

        let outcome = collection.select(3).expect("select");
        assert_eq!(outcome.ordinal, ordinal(2));
    }

    #[test]
    fn reselecting_keeps_existing_ordinal() {
        let mut collection = PhotoCollection::multiple(images(2));
        collection.select(1).expect("select");
        let again = collection.select(1).expect("select");
        assert_eq!(again.ordinal, ordinal(1));
        assert_eq!(collection.selected_count(), 1);
    }

    #[test]
    fn single_mode_replaces_previous_selection() {
        let mut collection = PhotoCollection::single(images(2));
        collection.select(0).expect("select");
        let outcome = collection.select(1).expect("select");

        assert_eq!(outcome.evicted, Some(0));
        assert_eq!(collection.selection_ordinal_of(0), None);
        assert_eq!(collection.selection_ordinal_of(1), Some(SelectionOrdinal::FIRST));
    }

    #[test]
    fn limit_is_per_media_type() {
        let assets = vec![
            Asset::new(AssetId::new(1), MediaType::Image),
            Asset::new(AssetId::new(2), MediaType::Image),
            Asset::new(AssetId::new(3), MediaType::Video),
        ];
        let mut collection =
            PhotoCollection::new(assets, SelectMode::Multiple, SelectionLimits::new(1, 1));

        collection.select(0).expect("first image");
        assert_eq!(
            collection.select(1),
            Err(SelectionError::LimitReached {
                media_type: MediaType::Image,
                limit: 1,
            })
        );
        assert!(collection.select(2).is_ok());
    }

    #[test]
    fn select_out_of_range_is_not_found() {
        let mut collection = PhotoCollection::multiple(images(1));
        assert_eq!(
            collection.select(4),
            Err(SelectionError::NotFound { index: 4 })
        );
        assert_eq!(
            collection.deselect(4),
            Err(SelectionError::NotFound { index: 4 })
        );
    }

    #[test]
    fn index_of_matches_by_identity() {
        let collection = PhotoCollection::multiple(images(3));
        let probe = Asset::new(AssetId::new(2), MediaType::Image);
        assert_eq!(collection.index_of(&probe), Some(2));
    }

    #[test]
    fn selected_assets_follow_selection_order() {
        let mut collection = PhotoCollection::multiple(images(3));
        collection.select(2).expect("select");
        collection.select(0).expect("select");

        let ids: Vec<u64> = collection
            .selected_assets()
            .map(|asset| asset.id().value())
            .collect();
        assert_eq!(ids, vec![2, 0]);

        collection.clear_selection();
        assert_eq!(collection.selected_count(), 0);
    }
}
