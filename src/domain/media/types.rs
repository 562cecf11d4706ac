// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents different types of media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Static image (JPEG, PNG, HEIC, etc.)
    Image,
    /// Video or live photo
    Video,
}

/// Stable identity of an asset within a browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(u64);

impl AssetId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

/// A single photo or video in the browsing collection.
///
/// Assets are owned by the collection; pages and the presenter only hold
/// clones, which compare equal by [`AssetId`].
///
/// # Example
///
/// ```
/// use photo_presenter::domain::media::{Asset, AssetId, MediaType};
///
/// let asset = Asset::new(AssetId::new(7), MediaType::Image);
/// assert_eq!(asset.id().value(), 7);
/// assert!(asset.created_at().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    id: AssetId,
    media_type: MediaType,
    /// Capture time, when the source library knows it.
    created_at: Option<DateTime<Utc>>,
}

impl Asset {
    #[must_use]
    pub fn new(id: AssetId, media_type: MediaType) -> Self {
        Self {
            id,
            media_type,
            created_at: None,
        }
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn id(&self) -> AssetId {
        self.id
    }

    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Asset {}
