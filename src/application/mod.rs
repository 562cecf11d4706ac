// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports and queries.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts implement the application layer ports
//! - The presenter uses application layer services

pub mod port;
pub mod query;
