// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports that infrastructure adapters implement.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The editor and the UI depend on ports, never on adapters directly

pub mod port;
