// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`presenter`] - Full-screen pager with selection toggle and info bar

pub mod presenter;
