// SPDX-License-Identifier: MPL-2.0
//! Photo pages and their in-flight request tokens.
//!
//! A [`PhotoPage`] is what the paging surface shows: one asset plus the
//! loads issued on its behalf. Loads are tracked by [`RequestToken`]s that
//! the loader polls; discarding a page flips every token it handed out.
//!
//! # Design
//!
//! - **Explicit cancellation**: tokens are cancelled by
//!   [`PhotoPage::cancel_all_requests`], never from `Drop`
//! - **Fire-and-forget**: cancelling only flips a flag; the loader notices
//!   on its next poll
//! - **Non-owning**: pages keep a `Weak` handle to the collection for
//!   read-only rendering, so a page outliving its presenter holds nothing

use crate::application::port::{AssetCollection, PhotoView};
use crate::domain::media::Asset;
use crate::domain::selection::SelectionOrdinal;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag for one load issued by a page.
///
/// Clones share the same flag, so the page can keep one copy and hand the
/// other to a loader running on a worker thread.
#[derive(Debug, Clone, Default)]
pub struct RequestToken {
    cancelled: Arc<AtomicBool>,
}

impl RequestToken {
    /// Returns `true` once the owning page has been discarded.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Flips the flag. Returns `true` if this call did the cancelling.
    fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::AcqRel)
    }
}

/// Statistics about a page's requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestStats {
    /// Tokens handed out since the page was created.
    pub issued: usize,
    /// Tokens cancelled through [`PhotoPage::cancel_all_requests`].
    pub cancelled: usize,
    /// Tokens released by their loader after finishing.
    pub finished: usize,
}

#[derive(Debug, Default)]
struct RequestLedger {
    live: Vec<RequestToken>,
    stats: RequestStats,
}

/// One page of the presenter: an asset bound to the shared collection.
pub struct PhotoPage<C> {
    asset: Asset,
    collection: Weak<RefCell<C>>,
    /// Shared by clones of the same page.
    requests: Rc<RefCell<RequestLedger>>,
}

impl<C> PhotoPage<C> {
    /// Binds `asset` to a non-owning handle of its collection.
    #[must_use]
    pub fn new(asset: Asset, collection: &Rc<RefCell<C>>) -> Self {
        Self {
            asset,
            collection: Rc::downgrade(collection),
            requests: Rc::new(RefCell::new(RequestLedger::default())),
        }
    }

    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Upgrades the collection handle, if the collection is still alive.
    #[must_use]
    pub fn collection(&self) -> Option<Rc<RefCell<C>>> {
        self.collection.upgrade()
    }

    /// Issues a token for a new load of this page's asset.
    pub fn begin_request(&self) -> RequestToken {
        let token = RequestToken::default();
        let mut ledger = self.requests.borrow_mut();
        ledger.live.push(token.clone());
        ledger.stats.issued += 1;
        token
    }

    /// Releases a token whose load has completed.
    pub fn finish_request(&self, token: &RequestToken) {
        let mut ledger = self.requests.borrow_mut();
        let before = ledger.live.len();
        ledger
            .live
            .retain(|live| !Arc::ptr_eq(&live.cancelled, &token.cancelled));
        if ledger.live.len() < before {
            ledger.stats.finished += 1;
        }
    }

    /// Number of loads still in flight.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.requests.borrow().live.len()
    }

    #[must_use]
    pub fn request_stats(&self) -> RequestStats {
        self.requests.borrow().stats
    }

    /// Cancels every live token and returns how many were cancelled.
    pub fn cancel_requests(&self) -> usize {
        let mut ledger = self.requests.borrow_mut();
        let cancelled = ledger
            .live
            .drain(..)
            .filter(RequestToken::cancel)
            .count();
        ledger.stats.cancelled += cancelled;
        cancelled
    }
}

impl<C: AssetCollection> PhotoPage<C> {
    /// Current selection ordinal of this page's asset, read through the
    /// collection handle. `None` if unselected or the collection is gone.
    #[must_use]
    pub fn selection_ordinal(&self) -> Option<SelectionOrdinal> {
        let collection = self.collection.upgrade()?;
        let collection = collection.borrow();
        let index = collection.index_of(&self.asset)?;
        collection.selection_ordinal_of(index)
    }
}

impl<C> PhotoView for PhotoPage<C> {
    fn asset(&self) -> &Asset {
        &self.asset
    }

    fn cancel_all_requests(&self) {
        self.cancel_requests();
    }
}

impl<C> Clone for PhotoPage<C> {
    fn clone(&self) -> Self {
        Self {
            asset: self.asset.clone(),
            collection: Weak::clone(&self.collection),
            requests: Rc::clone(&self.requests),
        }
    }
}

impl<C> PartialEq for PhotoPage<C> {
    fn eq(&self, other: &Self) -> bool {
        self.asset == other.asset
    }
}

impl<C> fmt::Debug for PhotoPage<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoPage")
            .field("asset", &self.asset.id())
            .field("pending_requests", &self.pending_requests())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{AssetId, MediaType};
    use crate::media::collection::PhotoCollection;

    fn shared(count: u64) -> Rc<RefCell<PhotoCollection>> {
        Rc::new(RefCell::new(PhotoCollection::multiple(
            (0..count)
                .map(|id| Asset::new(AssetId::new(id), MediaType::Image))
                .collect(),
        )))
    }

    fn page_at(collection: &Rc<RefCell<PhotoCollection>>, index: usize) -> PhotoPage<PhotoCollection> {
        let asset = collection.borrow().asset_at(index).cloned().expect("asset");
        PhotoPage::new(asset, collection)
    }

    #[test]
    fn cancel_flips_every_live_token() {
        let collection = shared(1);
        let page = page_at(&collection, 0);
        let first = page.begin_request();
        let second = page.begin_request();

        assert_eq!(page.cancel_requests(), 2);
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
        assert_eq!(page.pending_requests(), 0);
    }

    #[test]
    fn finished_requests_are_not_cancelled() {
        let collection = shared(1);
        let page = page_at(&collection, 0);
        let done = page.begin_request();
        let running = page.begin_request();
        page.finish_request(&done);

        assert_eq!(page.cancel_requests(), 1);
        assert!(!done.is_cancelled());
        assert!(running.is_cancelled());
        assert_eq!(
            page.request_stats(),
            RequestStats {
                issued: 2,
                cancelled: 1,
                finished: 1,
            }
        );
    }

    #[test]
    fn clones_share_the_request_ledger() {
        let collection = shared(1);
        let page = page_at(&collection, 0);
        let token = page.clone().begin_request();

        page.cancel_all_requests();
        assert!(token.is_cancelled());
    }

    #[test]
    fn selection_ordinal_reads_through_collection() {
        let collection = shared(2);
        let page = page_at(&collection, 1);
        assert_eq!(page.selection_ordinal(), None);

        collection.borrow_mut().select(1).expect("select");
        assert_eq!(page.selection_ordinal(), Some(SelectionOrdinal::FIRST));
    }

    #[test]
    fn page_does_not_keep_collection_alive() {
        let collection = shared(1);
        let page = page_at(&collection, 0);
        drop(collection);

        assert!(page.collection().is_none());
        assert_eq!(page.selection_ordinal(), None);
    }
}
