// SPDX-License-Identifier: MPL-2.0
//! Selection domain types.
//!
//! - [`SelectMode`]: single or multiple selection policy
//! - [`SelectionOrdinal`]: 1-based selection order of an asset

mod newtypes;

pub use newtypes::{SelectMode, SelectionOrdinal};
