// SPDX-License-Identifier: MPL-2.0
//! Creation-date title formatting.
//!
//! The pattern is validated once, when the formatter is built, so rendering
//! a title can never fail afterwards.

use crate::config::DEFAULT_TITLE_FORMAT;
use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Renders asset timestamps as info bar titles.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use photo_presenter::ui::presenter::TitleFormatter;
///
/// let formatter = TitleFormatter::from_offset_minutes("%Y年%-m月%-d日", Some(9 * 60))
///     .expect("valid pattern");
/// let at = Utc.with_ymd_and_hms(2018, 1, 25, 20, 0, 0).unwrap();
/// assert_eq!(formatter.format(at), "2018年1月26日");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFormatter {
    pattern: String,
    offset: FixedOffset,
}

impl TitleFormatter {
    /// Builds a formatter rendering in `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTitleFormat`] if `pattern` contains an
    /// unknown or malformed strftime specifier.
    pub fn new(pattern: impl Into<String>, offset: FixedOffset) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidTitleFormat(pattern));
        }
        Ok(Self { pattern, offset })
    }

    /// Builds a formatter from an optional offset in minutes (`None` = UTC).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTitleFormat`] for a bad pattern and
    /// [`Error::Config`] for an offset beyond ±24 hours.
    pub fn from_offset_minutes(pattern: impl Into<String>, minutes: Option<i32>) -> Result<Self> {
        let offset = match minutes {
            None => utc_offset(),
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| Error::Config(format!("UTC offset out of range: {minutes} min")))?,
        };
        Self::new(pattern, offset)
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Formats `at` in the configured offset.
    #[must_use]
    pub fn format(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset)
            .format(&self.pattern)
            .to_string()
    }
}

impl Default for TitleFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TITLE_FORMAT.to_string(),
            offset: utc_offset(),
        }
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}
