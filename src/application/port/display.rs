// SPDX-License-Identifier: MPL-2.0
//! Info display port definition.

use crate::domain::selection::SelectionOrdinal;

/// Everything the info bar shows for the photo under the cursor.
///
/// Always recomputed from scratch by the presenter; displays should render
/// it as-is without diffing against previous values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Formatted creation date, `None` when unknown.
    pub title: Option<String>,
    /// Whether the asset under the cursor is selected.
    pub is_selected: bool,
    /// Selection ordinal of the asset under the cursor.
    pub selection_ordinal: Option<SelectionOrdinal>,
    /// Whether the selection badge is shown at all.
    pub badge_visible: bool,
    /// Text inside the badge. `None` in single-select mode.
    pub badge_text: Option<String>,
    /// Caption of the select/deselect action button.
    pub action_caption: String,
}

impl DisplayState {
    /// State shown when there is nothing to display.
    #[must_use]
    pub fn empty(select_caption: &str) -> Self {
        Self {
            title: None,
            is_selected: false,
            selection_ordinal: None,
            badge_visible: false,
            badge_text: None,
            action_caption: select_caption.to_string(),
        }
    }
}

/// Write-only sink for [`DisplayState`].
pub trait InfoDisplay {
    fn render(&mut self, state: &DisplayState);
}
