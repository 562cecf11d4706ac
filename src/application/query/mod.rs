// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These functions do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`navigation`]: Adjacency, initial page and cursor snapshot

pub mod navigation;

// Re-export main types
pub use navigation::{
    adjacent_index, initial_index, navigation_info, NavigationError, NavigationInfo,
};
