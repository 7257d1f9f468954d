// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`onnx`]: face detection via ONNX Runtime (implements [`FaceDetector`])
//!
//! [`FaceDetector`]: crate::application::port::FaceDetector

pub mod onnx;

use crate::application::port::{NoFaceDetector, SharedFaceDetector};
use std::path::Path;
use std::sync::Arc;

pub use onnx::OnnxFaceDetector;

/// Builds the detector for the configured model.
///
/// Falls back to [`NoFaceDetector`] when detection is disabled or the model
/// cannot be loaded.
#[must_use]
pub fn face_detector(model_path: Option<&Path>) -> SharedFaceDetector {
    let Some(path) = model_path else {
        tracing::debug!("face detection disabled");
        return Arc::new(NoFaceDetector);
    };

    match OnnxFaceDetector::load(path) {
        Ok(detector) => {
            tracing::info!(model = %path.display(), "face detector loaded");
            Arc::new(detector)
        }
        Err(err) => {
            tracing::warn!(model = %path.display(), error = %err, "face detector unavailable");
            Arc::new(NoFaceDetector)
        }
    }
}
