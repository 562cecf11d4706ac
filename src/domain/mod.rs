// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types shared by every other layer.
//!
//! Nothing here knows about paging surfaces, displays or hosts. The only
//! external crates involved are `chrono` for timestamps and `serde` for
//! the types that appear in configuration and diagnostics.
//!
//! # Modules
//!
//! - [`diagnostics`]: Journal sizing ([`JournalCapacity`](diagnostics::JournalCapacity))
//! - [`media`]: Assets ([`Asset`](media::Asset), [`AssetId`](media::AssetId),
//!   [`MediaType`](media::MediaType))
//! - [`selection`]: Selection policy ([`SelectMode`](selection::SelectMode),
//!   [`SelectionOrdinal`](selection::SelectionOrdinal))

pub mod diagnostics;
pub mod media;
pub mod selection;
