// SPDX-License-Identifier: MPL-2.0
//! `photo_presenter` is the core of a full-screen photo picker pager.
//!
//! It pages through a shared asset collection one photo at a time, toggles
//! the current photo's selection under a single or multiple selection
//! policy, and keeps an info bar in sync. Rendering, gestures and loading
//! belong to the host, which plugs in through the traits in
//! [`application::port`].
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use photo_presenter::domain::media::{Asset, AssetId, MediaType};
//! use photo_presenter::media::PhotoCollection;
//! use photo_presenter::testing::{RecordingDisplay, RecordingSurface};
//! use photo_presenter::ui::presenter::{Presenter, PresenterSettings};
//!
//! let assets = (1..=3)
//!     .map(|id| Asset::new(AssetId::new(id), MediaType::Image))
//!     .collect();
//! let collection = Rc::new(RefCell::new(PhotoCollection::multiple(assets)));
//! let mut presenter = Presenter::new(
//!     PresenterSettings::default(),
//!     collection,
//!     RecordingSurface::default(),
//!     RecordingDisplay::default(),
//!     0,
//! );
//!
//! presenter.toggle_selection();
//! assert_eq!(presenter.display_state().badge_text.as_deref(), Some("1"));
//! ```

#![doc(html_root_url = "https://docs.rs/photo_presenter/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod media;
pub mod testing;
pub mod ui;
