// SPDX-License-Identifier: MPL-2.0
//! Face detection port definition.
//!
//! The editor only needs face boxes in source pixel coordinates; how they
//! are produced is up to the adapter. [`NoFaceDetector`] stands in when no
//! model is configured so the rest of the application never branches on
//! availability.

use crate::domain::media::{FaceBox, RawImage};
use std::sync::Arc;

/// Errors reported by a face detector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// No detector is configured.
    #[error("face detection is unavailable")]
    Unavailable,

    /// The model file could not be loaded.
    #[error("Failed to load face model: {0}")]
    ModelLoadFailed(String),

    /// Inference failed.
    #[error("Face detection failed: {0}")]
    InferenceFailed(String),
}

/// Port for face detection.
///
/// Implementations must be `Send + Sync`; detection runs on a blocking
/// worker thread while the UI keeps responding.
pub trait FaceDetector: Send + Sync {
    /// Returns the detected faces, most confident first.
    ///
    /// An empty vector means the image contains no face.
    ///
    /// # Errors
    ///
    /// Returns a [`DetectError`] when the detector is unavailable or fails.
    fn detect(&self, image: &RawImage) -> Result<Vec<FaceBox>, DetectError>;

    /// Whether calling [`detect`](Self::detect) can succeed at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str;
}

/// Shared handle to a detector.
pub type SharedFaceDetector = Arc<dyn FaceDetector>;

/// Detector used when face detection is disabled or its model is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaceDetector;

impl FaceDetector for NoFaceDetector {
    fn detect(&self, _image: &RawImage) -> Result<Vec<FaceBox>, DetectError> {
        Err(DetectError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(Vec<FaceBox>);

    impl FaceDetector for FixedDetector {
        fn detect(&self, _image: &RawImage) -> Result<Vec<FaceBox>, DetectError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn image() -> RawImage {
        RawImage::from_rgba(4, 4, vec![0u8; 64]).unwrap()
    }

    #[test]
    fn detect_error_display() {
        assert_eq!(
            DetectError::Unavailable.to_string(),
            "face detection is unavailable"
        );
        assert!(DetectError::InferenceFailed("bad shape".into())
            .to_string()
            .contains("bad shape"));
    }

    #[test]
    fn no_detector_is_unavailable() {
        let detector = NoFaceDetector;
        assert!(!detector.is_available());
        assert_eq!(detector.detect(&image()), Err(DetectError::Unavailable));
    }

    #[test]
    fn shared_detector_dispatches_dynamically() {
        let face = FaceBox::new(1.0, 1.0, 2.0, 2.0, 0.9);
        let detector: SharedFaceDetector = Arc::new(FixedDetector(vec![face]));
        assert!(detector.is_available());
        assert_eq!(detector.detect(&image()), Ok(vec![face]));
        assert_eq!(detector.name(), "fixed");
    }
}
