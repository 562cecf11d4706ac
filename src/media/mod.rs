// SPDX-License-Identifier: MPL-2.0
//! Concrete media building blocks for the presenter.
//!
//! - [`collection`]: [`PhotoCollection`], the in-memory asset collection
//! - [`page`]: [`PhotoPage`] and the [`RequestToken`]s it hands to loaders

pub mod collection;
pub mod page;

// Re-export commonly used types
pub use collection::{PhotoCollection, SelectionLimits};
pub use page::{PhotoPage, RequestStats, RequestToken};
