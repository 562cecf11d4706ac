// SPDX-License-Identifier: MPL-2.0
//! Paging surface port definition.
//!
//! A paging surface shows exactly one page at a time. It pulls neighbours
//! from the presenter (`page_before` / `page_after`) and reports settled
//! transitions back (`transition_settled`). The only call going the other
//! way is [`PagingSurface::show`].

use crate::domain::media::Asset;

/// Direction of a page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower indices.
    Previous,
    /// Towards higher indices.
    Next,
}

impl Direction {
    /// Applies the direction to `index`, returning `None` below zero.
    ///
    /// The upper bound is the collection's business.
    #[must_use]
    pub fn step(self, index: usize) -> Option<usize> {
        match self {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => index.checked_add(1),
        }
    }
}

/// A page rendering one asset and owning that asset's in-flight work.
pub trait PhotoView {
    /// The asset this page is bound to.
    fn asset(&self) -> &Asset;

    /// Cancels every outstanding request issued for this page.
    ///
    /// Fire-and-forget: must not block on the cancelled work.
    fn cancel_all_requests(&self);
}

/// Capability of a host paging widget.
pub trait PagingSurface {
    /// Page type the surface displays.
    type Page: PhotoView;

    /// Replaces the visible page, moving in `direction`.
    fn show(&mut self, page: Self::Page, direction: Direction, animated: bool);
}
