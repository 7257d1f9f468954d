// SPDX-License-Identifier: MPL-2.0
//! User interface pieces of the editor window.
//!
//! - [`pointer`] - Canvas program turning mouse input into pan messages
//! - [`design_tokens`] - Spacing, color and typography constants

pub mod design_tokens;
pub mod pointer;
