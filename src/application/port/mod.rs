// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The presenter talks to its collaborators only through these traits, so
//! any host framework can plug in its own collection, paging widget and
//! info bar.
//!
//! # Available Ports
//!
//! - [`collection`]: Asset lookup and selection state
//! - [`display`]: Info bar sink
//! - [`paging`]: One-page-at-a-time paging surface and its pages
//!
//! # Design Notes
//!
//! - All traits use domain types only (no widget handles)
//! - Everything runs on the UI thread, so nothing here is `Send + Sync`
//! - Selection changes return `Result` with [`SelectionError`]

pub mod collection;
pub mod display;
pub mod paging;

// Re-export main types for convenience
pub use collection::{AssetCollection, SelectOutcome, SelectionError};
pub use display::{DisplayState, InfoDisplay};
pub use paging::{Direction, PagingSurface, PhotoView};
