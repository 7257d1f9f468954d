// SPDX-License-Identifier: MPL-2.0
//! Mutable view state of the editor surface.
//!
//! - [`ViewState`]: cover scale, user zoom and pan offsets
//! - [`ZoomRange`]: bounds of the zoom control
//! - [`DragSession`]: transient pointer-drag tracking
//! - [`Generation`]: token that ties async results to the load that issued them

pub mod drag;
pub mod generation;
pub mod state;
pub mod zoom;

pub use drag::DragSession;
pub use generation::Generation;
pub use state::ViewState;
pub use zoom::ZoomRange;
