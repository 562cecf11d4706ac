// SPDX-License-Identifier: MPL-2.0
//! Projection of cursor and collection state onto the info bar.

use super::settings::PresenterSettings;
use crate::application::port::{AssetCollection, DisplayState};

/// Computes the info bar state for `cursor`.
///
/// Pure: reads the collection, writes nothing. An absent or dangling cursor
/// yields [`DisplayState::empty`].
#[must_use]
pub fn project<C>(collection: &C, cursor: Option<usize>, settings: &PresenterSettings) -> DisplayState
where
    C: AssetCollection + ?Sized,
{
    let Some((index, asset)) =
        cursor.and_then(|index| collection.asset_at(index).map(|asset| (index, asset)))
    else {
        return DisplayState::empty(&settings.select_caption);
    };

    let title = asset.created_at().map(|at| settings.title.format(at));

    match collection.selection_ordinal_of(index) {
        Some(ordinal) => DisplayState {
            title,
            is_selected: true,
            selection_ordinal: Some(ordinal),
            badge_visible: true,
            // Single mode keeps the badge but never the number.
            badge_text: collection
                .select_mode()
                .shows_ordinal()
                .then(|| ordinal.to_string()),
            action_caption: settings.deselect_caption.clone(),
        },
        None => DisplayState {
            title,
            is_selected: false,
            selection_ordinal: None,
            badge_visible: false,
            badge_text: None,
            action_caption: settings.select_caption.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{Asset, AssetId, MediaType};
    use crate::domain::selection::{SelectMode, SelectionOrdinal};
    use crate::media::PhotoCollection;
    use chrono::{TimeZone, Utc};

    fn dated_collection(mode: SelectMode) -> PhotoCollection {
        let when = Utc.with_ymd_and_hms(2018, 1, 26, 12, 0, 0).unwrap();
        let assets = vec![
            Asset::new(AssetId::new(1), MediaType::Image).with_created_at(when),
            Asset::new(AssetId::new(2), MediaType::Image),
        ];
        match mode {
            SelectMode::Single => PhotoCollection::single(assets),
            SelectMode::Multiple => PhotoCollection::multiple(assets),
        }
    }

    #[test]
    fn unselected_photo_offers_select_caption() {
        let collection = dated_collection(SelectMode::Multiple);
        let state = project(&collection, Some(0), &PresenterSettings::default());

        assert_eq!(state.title.as_deref(), Some("2018年1月26日"));
        assert!(!state.is_selected);
        assert!(!state.badge_visible);
        assert_eq!(state.badge_text, None);
        assert_eq!(state.action_caption, "選択");
    }

    #[test]
    fn selected_photo_shows_ordinal_in_multiple_mode() {
        let mut collection = dated_collection(SelectMode::Multiple);
        collection.select(1).expect("select");
        collection.select(0).expect("select");

        let state = project(&collection, Some(0), &PresenterSettings::default());
        assert!(state.badge_visible);
        assert_eq!(state.selection_ordinal, SelectionOrdinal::new(2));
        assert_eq!(state.badge_text.as_deref(), Some("2"));
        assert_eq!(state.action_caption, "選択削除");
    }

    #[test]
    fn single_mode_hides_ordinal_text() {
        let mut collection = dated_collection(SelectMode::Single);
        collection.select(0).expect("select");

        let state = project(&collection, Some(0), &PresenterSettings::default());
        assert!(state.is_selected);
        assert!(state.badge_visible);
        assert_eq!(state.badge_text, None);
    }

    #[test]
    fn badge_follows_collection_policy_not_config() {
        let mut config = crate::config::Config::default();
        config.selection.mode = SelectMode::Multiple;
        let settings = PresenterSettings::from_config(&config).expect("valid");
        let mut collection = dated_collection(SelectMode::Single);
        collection.select(0).expect("select");

        let state = project(&collection, Some(0), &settings);
        assert!(state.badge_visible);
        assert_eq!(state.badge_text, None);
        assert_eq!(state.selection_ordinal, SelectionOrdinal::new(1));
    }

    #[test]
    fn missing_timestamp_leaves_title_unset() {
        let collection = dated_collection(SelectMode::Multiple);
        let state = project(&collection, Some(1), &PresenterSettings::default());
        assert_eq!(state.title, None);
    }

    #[test]
    fn no_cursor_projects_empty_state() {
        let collection = dated_collection(SelectMode::Multiple);
        let settings = PresenterSettings::default();

        assert_eq!(
            project(&collection, None, &settings),
            DisplayState::empty("選択")
        );
        assert_eq!(
            project(&collection, Some(9), &settings),
            DisplayState::empty("選択")
        );
    }

    #[test]
    fn projection_is_repeatable() {
        let collection = dated_collection(SelectMode::Multiple);
        let settings = PresenterSettings::default();
        assert_eq!(
            project(&collection, Some(0), &settings),
            project(&collection, Some(0), &settings)
        );
    }
}
