// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the presenter.
//!
//! Every state change the presenter makes (or declines to make) is pushed
//! into a memory-bounded [`ActivityJournal`] alongside the `tracing` log
//! line. Hosts read it back to attach to bug reports.
//!
//! # Architecture
//!
//! - [`ActivityJournal`]: Ring buffer sized by
//!   [`JournalCapacity`](crate::domain::diagnostics::JournalCapacity)
//! - [`ActivityEvent`]: Timestamped record
//! - [`ActivityKind`]: Serializable description of what happened

mod events;
mod journal;

pub use events::{ActivityEvent, ActivityKind};
pub use journal::ActivityJournal;
