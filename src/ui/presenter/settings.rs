// SPDX-License-Identifier: MPL-2.0
//! Validated presenter settings.

use super::title::TitleFormatter;
use crate::config::{Config, DEFAULT_DESELECT_CAPTION, DEFAULT_SELECT_CAPTION};
use crate::domain::diagnostics::JournalCapacity;
use crate::error::Result;

/// Everything the presenter needs to know that is not owned by a collaborator.
///
/// The selection policy is not here: the collection owns it, and
/// `config.selection` is what hosts use to build that collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterSettings {
    /// Creation-date title formatter.
    pub title: TitleFormatter,
    /// Action caption for an unselected photo.
    pub select_caption: String,
    /// Action caption for a selected photo.
    pub deselect_caption: String,
    /// Activity journal length.
    pub journal_capacity: JournalCapacity,
}

impl PresenterSettings {
    /// Default captions, title format and journal size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: TitleFormatter::default(),
            select_caption: DEFAULT_SELECT_CAPTION.to_string(),
            deselect_caption: DEFAULT_DESELECT_CAPTION.to_string(),
            journal_capacity: JournalCapacity::default(),
        }
    }

    /// Validates and converts a loaded [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTitleFormat`](crate::error::Error::InvalidTitleFormat)
    /// for a malformed title pattern and
    /// [`Error::Config`](crate::error::Error::Config) for an out-of-range
    /// UTC offset. Nothing is silently replaced by a default.
    pub fn from_config(config: &Config) -> Result<Self> {
        let info_bar = &config.info_bar;
        Ok(Self {
            title: TitleFormatter::from_offset_minutes(
                info_bar.title_format.clone(),
                info_bar.utc_offset_minutes,
            )?,
            select_caption: info_bar.select_caption.clone(),
            deselect_caption: info_bar.deselect_caption.clone(),
            journal_capacity: JournalCapacity::new(config.diagnostics.journal_capacity),
        })
    }
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_config_converts_to_default_settings() {
        let settings = PresenterSettings::from_config(&Config::default()).expect("valid");
        assert_eq!(settings, PresenterSettings::default());
    }

    #[test]
    fn malformed_title_pattern_fails_loudly() {
        let mut config = Config::default();
        config.info_bar.title_format = "%Y %".to_string();

        let result = PresenterSettings::from_config(&config);
        assert!(matches!(result, Err(Error::InvalidTitleFormat(_))));
    }

    #[test]
    fn journal_capacity_is_clamped() {
        let mut config = Config::default();
        config.diagnostics.journal_capacity = 0;

        let settings = PresenterSettings::from_config(&config).expect("valid");
        assert_eq!(settings.journal_capacity, JournalCapacity::new(0));
    }
}
