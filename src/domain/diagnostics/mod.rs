// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`JournalCapacity`]: bounded length of the presenter activity journal

mod newtypes;

pub use newtypes::{journal_capacity_bounds, JournalCapacity};
