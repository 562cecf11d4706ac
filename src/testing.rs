// SPDX-License-Identifier: MPL-2.0
//! Recording collaborators for exercising a [`Presenter`] without a UI.
//!
//! Useful for testing hosts and the presenter itself: the surface and the
//! display record what they are told, and [`EventLog`] records every host
//! callback in firing order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::port::{
    AssetCollection, Direction, DisplayState, InfoDisplay, PagingSurface, SelectionError,
};
use crate::domain::media::AssetId;
use crate::media::PhotoPage;
use crate::ui::presenter::Presenter;

/// One call to [`PagingSurface::show`].
#[derive(Debug, Clone)]
pub struct ShownPage<C> {
    pub page: PhotoPage<C>,
    pub direction: Direction,
    pub animated: bool,
}

/// Paging surface that remembers every page it was shown.
#[derive(Debug)]
pub struct RecordingSurface<C> {
    shown: Vec<ShownPage<C>>,
}

impl<C> RecordingSurface<C> {
    /// Every page shown, oldest first.
    #[must_use]
    pub fn shown(&self) -> &[ShownPage<C>] {
        &self.shown
    }

    /// The most recently shown page.
    #[must_use]
    pub fn current(&self) -> Option<&PhotoPage<C>> {
        self.shown.last().map(|shown| &shown.page)
    }
}

impl<C> Default for RecordingSurface<C> {
    fn default() -> Self {
        Self { shown: Vec::new() }
    }
}

impl<C> PagingSurface for RecordingSurface<C> {
    type Page = PhotoPage<C>;

    fn show(&mut self, page: PhotoPage<C>, direction: Direction, animated: bool) {
        self.shown.push(ShownPage {
            page,
            direction,
            animated,
        });
    }
}

/// Info display that keeps every state it rendered.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    states: Vec<DisplayState>,
}

impl RecordingDisplay {
    #[must_use]
    pub fn states(&self) -> &[DisplayState] {
        &self.states
    }

    #[must_use]
    pub fn last(&self) -> Option<&DisplayState> {
        self.states.last()
    }
}

impl InfoDisplay for RecordingDisplay {
    fn render(&mut self, state: &DisplayState) {
        self.states.push(state.clone());
    }
}

/// A host callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Selected(usize),
    Deselected(usize),
    MovedToPage { asset: AssetId, index: usize },
    SelectionRejected { index: usize, error: SelectionError },
    Closed,
}

/// Shared log of host callbacks.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<HostEvent>>>,
}

impl EventLog {
    /// Installs a handler for every presenter callback, replacing any
    /// previously set ones.
    pub fn attach<C, S, D>(&self, presenter: &mut Presenter<C, S, D>)
    where
        C: AssetCollection + 'static,
        S: PagingSurface<Page = PhotoPage<C>>,
        D: InfoDisplay,
    {
        let events = Rc::clone(&self.events);
        presenter.set_on_selected(move |index| events.borrow_mut().push(HostEvent::Selected(index)));

        let events = Rc::clone(&self.events);
        presenter
            .set_on_deselected(move |index| events.borrow_mut().push(HostEvent::Deselected(index)));

        let events = Rc::clone(&self.events);
        presenter.set_on_moved_to_page(move |page, index| {
            events.borrow_mut().push(HostEvent::MovedToPage {
                asset: page.asset().id(),
                index,
            });
        });

        let events = Rc::clone(&self.events);
        presenter.set_on_selection_rejected(move |index, error| {
            events.borrow_mut().push(HostEvent::SelectionRejected {
                index,
                error: error.clone(),
            });
        });

        let events = Rc::clone(&self.events);
        presenter.set_on_close(move || events.borrow_mut().push(HostEvent::Closed));
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
