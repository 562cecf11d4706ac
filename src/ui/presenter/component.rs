// SPDX-License-Identifier: MPL-2.0
//! Presenter component encapsulating paging, selection and info bar state.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::display;
use super::handlers::PresenterHandlers;
use super::settings::PresenterSettings;
use crate::application::port::{
    AssetCollection, Direction, DisplayState, InfoDisplay, PagingSurface, PhotoView,
    SelectionError,
};
use crate::application::query::{self, NavigationInfo};
use crate::config::Config;
use crate::diagnostics::{ActivityJournal, ActivityKind};
use crate::domain::media::Asset;
use crate::domain::selection::SelectionOrdinal;
use crate::error::Result;
use crate::media::PhotoPage;

/// A settled page transition, as reported by the paging surface.
#[derive(Debug)]
pub struct PageTransition<'a, C> {
    /// The page now in front.
    pub front: &'a PhotoPage<C>,
    /// Pages the surface is throwing away.
    pub discarded: &'a [PhotoPage<C>],
    /// `false` when the user abandoned the gesture.
    pub completed: bool,
}

impl<'a, C> PageTransition<'a, C> {
    /// A transition the user carried through to `front`.
    #[must_use]
    pub fn completed(front: &'a PhotoPage<C>, discarded: &'a [PhotoPage<C>]) -> Self {
        Self {
            front,
            discarded,
            completed: true,
        }
    }

    /// A gesture the user abandoned mid-swipe.
    #[must_use]
    pub fn cancelled(front: &'a PhotoPage<C>, discarded: &'a [PhotoPage<C>]) -> Self {
        Self {
            front,
            discarded,
            completed: false,
        }
    }
}

/// Result of [`Presenter::toggle_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The asset under the cursor is now selected.
    Selected {
        index: usize,
        ordinal: SelectionOrdinal,
        /// Single mode: the index that lost its selection.
        evicted: Option<usize>,
    },
    /// The asset under the cursor is no longer selected.
    Deselected { index: usize },
    /// The collection refused the change.
    Rejected {
        index: usize,
        error: SelectionError,
    },
    /// Nothing under the cursor, or the presenter is closed.
    Inert,
}

/// Coordinates a paging surface, a shared collection and an info bar.
///
/// The presenter owns the cursor. The collection owns selection state and
/// policy. The surface owns the visible pages.
pub struct Presenter<C, S, D>
where
    C: AssetCollection,
    S: PagingSurface<Page = PhotoPage<C>>,
    D: InfoDisplay,
{
    settings: PresenterSettings,
    collection: Rc<RefCell<C>>,
    surface: S,
    display: D,
    cursor: Option<usize>,
    transition_pending: bool,
    closed: bool,
    handlers: PresenterHandlers<C>,
    journal: ActivityJournal,
}

impl<C, S, D> Presenter<C, S, D>
where
    C: AssetCollection,
    S: PagingSurface<Page = PhotoPage<C>>,
    D: InfoDisplay,
{
    /// Creates a presenter and shows the page at `initial_index`.
    ///
    /// An index that does not resolve falls back to the first page. An empty
    /// collection yields an inert presenter that shows nothing and ignores
    /// every command.
    pub fn new(
        settings: PresenterSettings,
        collection: Rc<RefCell<C>>,
        surface: S,
        display: D,
        initial_index: usize,
    ) -> Self {
        let journal = ActivityJournal::new(settings.journal_capacity);
        let mut presenter = Self {
            settings,
            collection,
            surface,
            display,
            cursor: None,
            transition_pending: false,
            closed: false,
            handlers: PresenterHandlers::default(),
            journal,
        };

        let start = {
            let collection = presenter.collection.borrow();
            query::initial_index(&*collection, initial_index)
                .map(|index| (index, collection.asset_at(index).cloned()))
        };

        match start {
            Ok((index, Some(asset))) => {
                if index != initial_index {
                    debug!(requested = initial_index, index, "initial index fell back");
                }
                presenter.cursor = Some(index);
                let page = PhotoPage::new(asset, &presenter.collection);
                presenter.surface.show(page, Direction::Next, true);
                presenter.journal.record(ActivityKind::Shown { index });
                info!(index, "presenter opened");
            }
            Ok((index, None)) => {
                warn!(index, "initial asset vanished during lookup");
                presenter.journal.record(ActivityKind::Inert);
            }
            Err(error) => {
                info!(%error, "presenter opened inert");
                presenter.journal.record(ActivityKind::Inert);
            }
        }

        presenter.refresh();
        presenter
    }

    /// Creates a presenter from a loaded [`Config`].
    ///
    /// # Errors
    ///
    /// Fails when the configured title format or UTC offset is invalid.
    pub fn from_config(
        config: &Config,
        collection: Rc<RefCell<C>>,
        surface: S,
        display: D,
        initial_index: usize,
    ) -> Result<Self> {
        let settings = PresenterSettings::from_config(config)?;
        Ok(Self::new(settings, collection, surface, display, initial_index))
    }

    pub fn set_on_selected(&mut self, handler: impl FnMut(usize) + 'static) {
        self.handlers.on_selected = Some(Box::new(handler));
    }

    pub fn set_on_deselected(&mut self, handler: impl FnMut(usize) + 'static) {
        self.handlers.on_deselected = Some(Box::new(handler));
    }

    pub fn set_on_moved_to_page(&mut self, handler: impl FnMut(&PhotoPage<C>, usize) + 'static) {
        self.handlers.on_moved_to_page = Some(Box::new(handler));
    }

    pub fn set_on_selection_rejected(
        &mut self,
        handler: impl FnMut(usize, &SelectionError) + 'static,
    ) {
        self.handlers.on_selection_rejected = Some(Box::new(handler));
    }

    pub fn set_on_close(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.on_close = Some(Box::new(handler));
    }

    // =========================================================================
    // Paging queries
    // =========================================================================

    /// Page preceding `page`, if any.
    #[must_use]
    pub fn page_before(&self, page: &PhotoPage<C>) -> Option<PhotoPage<C>> {
        self.adjacent_page(page, Direction::Previous)
    }

    /// Page following `page`, if any.
    #[must_use]
    pub fn page_after(&self, page: &PhotoPage<C>) -> Option<PhotoPage<C>> {
        self.adjacent_page(page, Direction::Next)
    }

    /// Builds the neighbour of `page` in `direction`.
    ///
    /// Pure: the surface may call this to prefetch without moving.
    #[must_use]
    pub fn adjacent_page(&self, page: &PhotoPage<C>, direction: Direction) -> Option<PhotoPage<C>> {
        let asset = self.adjacent_asset(page.asset(), direction)?;
        Some(PhotoPage::new(asset, &self.collection))
    }

    fn adjacent_asset(&self, from: &Asset, direction: Direction) -> Option<Asset> {
        let collection = self.collection.borrow();
        match query::adjacent_index(&*collection, from, direction) {
            Ok(index) => collection.asset_at(index).cloned(),
            Err(error) => {
                debug!(asset = %from.id(), ?direction, %error, "no adjacent page");
                None
            }
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Notes that the surface started an interactive transition.
    pub fn transition_will_begin(&mut self) {
        self.transition_pending = true;
    }

    /// Commits (or discards) a transition reported by the surface.
    ///
    /// A completed transition moves the cursor, refreshes the info bar,
    /// notifies the host, and only then cancels the discarded pages' work.
    /// A cancelled one changes nothing.
    pub fn transition_settled(&mut self, transition: PageTransition<'_, C>) {
        self.transition_pending = false;

        if !transition.completed {
            debug!("transition cancelled by user");
            self.journal.record(ActivityKind::TransitionCancelled);
            return;
        }

        if self.closed {
            self.cancel_discarded(transition.discarded);
            return;
        }

        let resolved = self.collection.borrow().index_of(transition.front.asset());
        let Some(index) = resolved else {
            warn!(
                asset = %transition.front.asset().id(),
                "settled page is no longer in the collection"
            );
            self.journal.record(ActivityKind::Degraded {
                reason: format!("{} left the collection", transition.front.asset().id()),
            });
            return;
        };

        self.cursor = Some(index);
        self.refresh();
        self.journal.record(ActivityKind::Moved { index });
        debug!(index, "moved to page");
        self.handlers.moved_to_page(transition.front, index);
        self.cancel_discarded(transition.discarded);
    }

    fn cancel_discarded(&mut self, discarded: &[PhotoPage<C>]) {
        if discarded.is_empty() {
            return;
        }
        let requests: usize = discarded
            .iter()
            .map(|page| {
                let live = page.pending_requests();
                page.cancel_all_requests();
                live
            })
            .sum();
        debug!(pages = discarded.len(), requests, "cancelled discarded pages");
        self.journal.record(ActivityKind::RequestsCancelled {
            pages: discarded.len(),
            requests,
        });
    }

    /// Starts an animated move to the neighbouring page.
    ///
    /// Returns `false` (and does nothing) when closed, inert, at the end of
    /// the collection, or while another transition is pending. The move
    /// completes when the surface reports it through
    /// [`transition_settled`](Self::transition_settled).
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let refusal = if self.closed {
            Some("presenter is closed")
        } else if self.transition_pending {
            Some("transition already pending")
        } else {
            None
        };
        if let Some(reason) = refusal {
            return self.refuse_navigation(reason);
        }

        let current = self.current_asset();
        let Some(target) = current.and_then(|asset| self.adjacent_asset(&asset, direction)) else {
            return self.refuse_navigation("no adjacent page");
        };

        self.transition_pending = true;
        let page = PhotoPage::new(target, &self.collection);
        self.surface.show(page, direction, true);
        true
    }

    fn refuse_navigation(&mut self, reason: &str) -> bool {
        debug!(reason, "navigation refused");
        self.journal.record(ActivityKind::NavigationRefused {
            reason: reason.to_string(),
        });
        false
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects or deselects the asset under the cursor.
    ///
    /// Policy (eviction, limits, ordinals) is left entirely to the
    /// collection. The cursor and the surface are never touched.
    pub fn toggle_selection(&mut self) -> ToggleOutcome {
        if self.closed {
            return ToggleOutcome::Inert;
        }
        let Some(index) = self.cursor else {
            return ToggleOutcome::Inert;
        };

        // The borrow ends before any handler runs.
        let change = {
            let mut collection = self.collection.borrow_mut();
            if collection.asset_at(index).is_none() {
                None
            } else if collection.selection_ordinal_of(index).is_some() {
                Some(collection.deselect(index).map(|()| None))
            } else {
                Some(collection.select(index).map(Some))
            }
        };

        let outcome = match change {
            None => {
                warn!(index, "cursor no longer resolves to an asset");
                self.journal.record(ActivityKind::Degraded {
                    reason: format!("cursor {index} out of range"),
                });
                ToggleOutcome::Inert
            }
            Some(Ok(Some(selected))) => {
                info!(index, ordinal = selected.ordinal.value(), evicted = ?selected.evicted, "selected");
                self.journal.record(ActivityKind::Selected {
                    index,
                    ordinal: selected.ordinal.value(),
                    evicted: selected.evicted,
                });
                self.handlers.selected(index);
                ToggleOutcome::Selected {
                    index,
                    ordinal: selected.ordinal,
                    evicted: selected.evicted,
                }
            }
            Some(Ok(None)) => {
                info!(index, "deselected");
                self.journal.record(ActivityKind::Deselected { index });
                self.handlers.deselected(index);
                ToggleOutcome::Deselected { index }
            }
            Some(Err(error)) => {
                warn!(index, %error, "selection rejected");
                self.journal.record(ActivityKind::SelectionRejected {
                    index,
                    reason: error.to_string(),
                });
                self.handlers.selection_rejected(index, &error);
                ToggleOutcome::Rejected { index, error }
            }
        };

        self.refresh();
        outcome
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Asks the host to dismiss the presenter.
    ///
    /// Idempotent: the close handler fires once. Afterwards commands are
    /// ignored, but settled transitions still cancel their discarded pages.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        info!("presenter closed");
        self.journal.record(ActivityKind::Closed);
        self.handlers.close();
    }

    /// Recomputes the info bar state and pushes it to the display.
    pub fn refresh(&mut self) {
        let state = self.display_state();
        self.display.render(&state);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Info bar state for the current cursor.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        display::project(&*self.collection.borrow(), self.cursor, &self.settings)
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        query::navigation_info(&*self.collection.borrow(), self.cursor)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Asset under the cursor.
    #[must_use]
    pub fn current_asset(&self) -> Option<Asset> {
        let index = self.cursor?;
        self.collection.borrow().asset_at(index).cloned()
    }

    #[must_use]
    pub fn is_transition_pending(&self) -> bool {
        self.transition_pending
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn settings(&self) -> &PresenterSettings {
        &self.settings
    }

    /// Recent activity, oldest first.
    #[must_use]
    pub fn activity(&self) -> &ActivityJournal {
        &self.journal
    }

    #[must_use]
    pub fn collection(&self) -> &Rc<RefCell<C>> {
        &self.collection
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{AssetId, MediaType};
    use crate::media::PhotoCollection;
    use crate::testing::{RecordingDisplay, RecordingSurface};

    type TestPresenter =
        Presenter<PhotoCollection, RecordingSurface<PhotoCollection>, RecordingDisplay>;

    fn assets(count: u64) -> Vec<Asset> {
        (1..=count)
            .map(|id| Asset::new(AssetId::new(id), MediaType::Image))
            .collect()
    }

    fn presenter(collection: PhotoCollection, initial: usize) -> TestPresenter {
        let settings = PresenterSettings::default();
        Presenter::new(
            settings,
            Rc::new(RefCell::new(collection)),
            RecordingSurface::default(),
            RecordingDisplay::default(),
            initial,
        )
    }

    #[test]
    fn construction_shows_requested_page() {
        let presenter = presenter(PhotoCollection::multiple(assets(3)), 1);

        assert_eq!(presenter.cursor(), Some(1));
        let shown = presenter.surface().shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].page.asset().id(), AssetId::new(2));
        assert_eq!(shown[0].direction, Direction::Next);
        assert_eq!(presenter.display().states().len(), 1);
    }

    #[test]
    fn unresolvable_initial_index_falls_back_to_first() {
        let presenter = presenter(PhotoCollection::multiple(assets(2)), 7);
        assert_eq!(presenter.cursor(), Some(0));
    }

    #[test]
    fn adjacency_does_not_move_cursor() {
        let presenter = presenter(PhotoCollection::multiple(assets(3)), 1);
        let current = presenter.surface().current().expect("shown").clone();

        let after = presenter.page_after(&current).expect("next");
        let before = presenter.page_before(&current).expect("previous");

        assert_eq!(after.asset().id(), AssetId::new(3));
        assert_eq!(before.asset().id(), AssetId::new(1));
        assert_eq!(presenter.cursor(), Some(1));
        assert!(presenter.page_after(&after).is_none());
        assert!(presenter.page_before(&before).is_none());
    }

    #[test]
    fn adjacency_of_removed_asset_is_none() {
        let presenter = presenter(PhotoCollection::multiple(assets(3)), 0);
        let stranger = PhotoPage::new(
            Asset::new(AssetId::new(99), MediaType::Image),
            presenter.collection(),
        );
        assert!(presenter.page_after(&stranger).is_none());
    }

    #[test]
    fn navigate_is_refused_while_pending() {
        let mut presenter = presenter(PhotoCollection::multiple(assets(3)), 0);

        assert!(presenter.navigate(Direction::Next));
        assert!(presenter.is_transition_pending());
        assert!(!presenter.navigate(Direction::Next));
        assert_eq!(presenter.surface().shown().len(), 2);
        // Cursor moves only when the transition settles.
        assert_eq!(presenter.cursor(), Some(0));
    }

    #[test]
    fn navigate_at_end_is_refused() {
        let mut presenter = presenter(PhotoCollection::multiple(assets(2)), 1);
        assert!(!presenter.navigate(Direction::Next));
        assert!(!presenter.is_transition_pending());
        assert!(matches!(
            presenter.activity().last().map(|event| &event.kind),
            Some(ActivityKind::NavigationRefused { .. })
        ));
    }

    #[test]
    fn settled_navigation_moves_cursor() {
        let mut presenter = presenter(PhotoCollection::multiple(assets(3)), 0);
        let old = presenter.surface().current().expect("shown").clone();

        assert!(presenter.navigate(Direction::Next));
        let front = presenter.surface().current().expect("shown").clone();
        presenter.transition_settled(PageTransition::completed(&front, &[old]));

        assert_eq!(presenter.cursor(), Some(1));
        assert!(!presenter.is_transition_pending());
    }

    #[test]
    fn selection_rejection_keeps_state() {
        let collection = PhotoCollection::new(
            assets(2),
            crate::domain::selection::SelectMode::Multiple,
            crate::media::SelectionLimits {
                max_images: Some(1),
                max_videos: None,
            },
        );
        let mut presenter = presenter(collection, 0);

        assert!(matches!(
            presenter.toggle_selection(),
            ToggleOutcome::Selected { index: 0, .. }
        ));
        let page = presenter.surface().current().expect("shown").clone();
        let next = presenter.page_after(&page).expect("next");
        presenter.transition_settled(PageTransition::completed(&next, &[]));

        let outcome = presenter.toggle_selection();
        assert!(matches!(
            outcome,
            ToggleOutcome::Rejected {
                index: 1,
                error: SelectionError::LimitReached { limit: 1, .. }
            }
        ));
        assert!(!presenter.display_state().is_selected);
        assert_eq!(presenter.collection().borrow().selected_count(), 1);
    }

    #[test]
    fn close_fires_once_and_disables_commands() {
        let mut presenter = presenter(PhotoCollection::multiple(assets(2)), 0);
        let closes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&closes);
        presenter.set_on_close(move || *counter.borrow_mut() += 1);

        presenter.close();
        presenter.close();

        assert_eq!(*closes.borrow(), 1);
        assert!(presenter.is_closed());
        assert_eq!(presenter.toggle_selection(), ToggleOutcome::Inert);
        assert!(!presenter.navigate(Direction::Next));
    }

    #[test]
    fn handlers_may_read_the_collection() {
        let mut presenter = presenter(PhotoCollection::multiple(assets(2)), 0);
        let collection = Rc::clone(presenter.collection());
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        presenter.set_on_selected(move |index| {
            *sink.borrow_mut() = collection.borrow().selection_ordinal_of(index);
        });

        presenter.toggle_selection();
        assert_eq!(*seen.borrow(), Some(SelectionOrdinal::FIRST));
    }

    #[test]
    fn navigation_info_tracks_cursor() {
        let presenter = presenter(PhotoCollection::multiple(assets(3)), 2);
        let info = presenter.navigation_info();
        assert!(info.at_last);
        assert!(info.has_previous);
        assert!(!info.has_next);
        assert_eq!(info.current_index, Some(2));
        assert_eq!(info.total_count, 3);
    }
}
