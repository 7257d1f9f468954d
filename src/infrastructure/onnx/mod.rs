// SPDX-License-Identifier: MPL-2.0
//! ONNX Runtime adapters implementing the [`FaceDetector`] port trait.
//!
//! [`FaceDetector`]: crate::application::port::FaceDetector

mod face;

pub use face::{OnnxFaceDetector, INPUT_HEIGHT, INPUT_WIDTH, NMS_IOU_THRESHOLD, SCORE_THRESHOLD};
