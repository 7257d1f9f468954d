// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the editor stays independent of
//! the inference runtime behind them.
//!
//! # Available Ports
//!
//! - [`face`]: Face detection used to auto-center a freshly loaded image

pub mod face;

pub use face::{DetectError, FaceDetector, NoFaceDetector, SharedFaceDetector};
