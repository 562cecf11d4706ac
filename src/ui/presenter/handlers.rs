// SPDX-License-Identifier: MPL-2.0
//! Host callbacks fired by the presenter.

use crate::application::port::SelectionError;
use crate::media::PhotoPage;

type IndexHandler = Box<dyn FnMut(usize)>;
type MovedHandler<C> = Box<dyn FnMut(&PhotoPage<C>, usize)>;
type RejectedHandler = Box<dyn FnMut(usize, &SelectionError)>;
type CloseHandler = Box<dyn FnMut()>;

/// Optional callbacks; unset ones are skipped.
///
/// Handlers run after the presenter's own state is consistent, and after
/// every collection borrow is released, so they may read the collection.
pub(crate) struct PresenterHandlers<C> {
    pub(crate) on_selected: Option<IndexHandler>,
    pub(crate) on_deselected: Option<IndexHandler>,
    pub(crate) on_moved_to_page: Option<MovedHandler<C>>,
    pub(crate) on_selection_rejected: Option<RejectedHandler>,
    pub(crate) on_close: Option<CloseHandler>,
}

impl<C> PresenterHandlers<C> {
    pub(crate) fn selected(&mut self, index: usize) {
        if let Some(handler) = self.on_selected.as_mut() {
            handler(index);
        }
    }

    pub(crate) fn deselected(&mut self, index: usize) {
        if let Some(handler) = self.on_deselected.as_mut() {
            handler(index);
        }
    }

    pub(crate) fn moved_to_page(&mut self, page: &PhotoPage<C>, index: usize) {
        if let Some(handler) = self.on_moved_to_page.as_mut() {
            handler(page, index);
        }
    }

    pub(crate) fn selection_rejected(&mut self, index: usize, error: &SelectionError) {
        if let Some(handler) = self.on_selection_rejected.as_mut() {
            handler(index, error);
        }
    }

    pub(crate) fn close(&mut self) {
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }
}

impl<C> Default for PresenterHandlers<C> {
    fn default() -> Self {
        Self {
            on_selected: None,
            on_deselected: None,
            on_moved_to_page: None,
            on_selection_rejected: None,
            on_close: None,
        }
    }
}
