// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and the geometry
//! of the circular viewport. It has no dependencies on external crates
//! (except `std`) so every rule here is testable with plain numbers.
//!
//! # Modules
//!
//! - [`geometry`]: cover scale, draw rectangle, face-centering offsets
//! - [`media`]: media types ([`RawImage`](media::RawImage), [`FaceBox`](media::FaceBox))
//! - [`view`]: editor view state ([`ViewState`](view::ViewState),
//!   [`DragSession`](view::DragSession), [`Generation`](view::Generation))

pub mod geometry;
pub mod media;
pub mod view;
