// SPDX-License-Identifier: MPL-2.0
//! `dp_framer` frames a profile picture: the image is cover-fitted into a
//! circular viewport, panned and zoomed by the user, decorated with a frame
//! overlay and exported as a square PNG.
//!
//! # Layers
//!
//! - [`domain`]: pure geometry and view state
//! - [`application`]: ports implemented by adapters
//! - [`infrastructure`]: ONNX Runtime face detection
//! - [`media`]: decoding, compositing and PNG export
//! - [`editor`]: the editor surface state machine
//! - [`app`] / [`ui`]: the iced window

#![doc(html_root_url = "https://docs.rs/dp_framer/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
