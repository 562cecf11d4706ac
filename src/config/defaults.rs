// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Selection**: Per-media-type selection caps
//! - **Info bar**: Title format and action captions
//! - **Diagnostics**: Activity journal length

use crate::domain::diagnostics::journal_capacity_bounds;

// ==========================================================================
// Selection Defaults
// ==========================================================================

/// Default maximum number of selected images.
pub const DEFAULT_MAX_IMAGE_SELECTIONS: usize = 10;

/// Default maximum number of selected videos.
pub const DEFAULT_MAX_VIDEO_SELECTIONS: usize = 10;

// ==========================================================================
// Info Bar Defaults
// ==========================================================================

/// Default strftime pattern for the photo title (e.g. `2018年1月26日`).
pub const DEFAULT_TITLE_FORMAT: &str = "%Y年%-m月%-d日";

/// Caption of the action button when the photo is not selected.
pub const DEFAULT_SELECT_CAPTION: &str = "選択";

/// Caption of the action button when the photo is selected.
pub const DEFAULT_DESELECT_CAPTION: &str = "選択削除";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity events kept by the presenter.
pub const DEFAULT_JOURNAL_CAPACITY: usize = journal_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_IMAGE_SELECTIONS > 0);
    assert!(DEFAULT_MAX_VIDEO_SELECTIONS > 0);
    assert!(DEFAULT_JOURNAL_CAPACITY >= journal_capacity_bounds::MIN);
    assert!(DEFAULT_JOURNAL_CAPACITY <= journal_capacity_bounds::MAX);
};
