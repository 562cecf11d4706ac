// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo presenter.
//!
//! Pages through a shared [`AssetCollection`](crate::application::port::AssetCollection)
//! one asset at a time, toggles the current asset's selection, and keeps an
//! info bar (creation date, selection badge, action caption) in sync.
//!
//! # Flow
//!
//! 1. The host builds a [`Presenter`] over a collection, a paging surface and
//!    an info display. The initial page is shown immediately.
//! 2. The surface asks for neighbours through [`Presenter::page_before`] and
//!    [`Presenter::page_after`], and reports settled gestures through
//!    [`Presenter::transition_settled`].
//! 3. The host's action button calls [`Presenter::toggle_selection`].

mod component;
mod display;
mod handlers;
mod settings;
mod title;

pub use component::{PageTransition, Presenter, ToggleOutcome};
pub use display::project;
pub use settings::PresenterSettings;
pub use title::TitleFormatter;
