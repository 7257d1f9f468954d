// SPDX-License-Identifier: MPL-2.0
//! UltraFace-style face detector implementing the [`FaceDetector`] port.
//!
//! The model takes a `1x3x240x320` RGB tensor normalized as `(v - 127) / 128`
//! and produces per-anchor class scores `[1, N, 2]` and corner boxes
//! `[1, N, 4]` in normalized coordinates.
//!
//! [`FaceDetector`]: crate::application::port::FaceDetector
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;
use ndarray::Array4;
use ort::session::{builder::GraphOptimizationLevel, Session};

use crate::application::port::{DetectError, FaceDetector};
use crate::domain::media::{FaceBox, RawImage};

/// Model input width.
pub const INPUT_WIDTH: u32 = 320;
/// Model input height.
pub const INPUT_HEIGHT: u32 = 240;
/// Minimum face probability kept.
pub const SCORE_THRESHOLD: f32 = 0.7;
/// Overlap above which the weaker of two boxes is suppressed.
pub const NMS_IOU_THRESHOLD: f32 = 0.3;

const PIXEL_MEAN: f32 = 127.0;
const PIXEL_SCALE: f32 = 128.0;

/// ONNX Runtime face detector.
///
/// # Thread Safety
///
/// `Session::run` needs exclusive access, so the session sits behind a
/// mutex; detections on the same detector are serialized.
pub struct OnnxFaceDetector {
    session: Mutex<Session>,
    model_path: PathBuf,
}

impl std::fmt::Debug for OnnxFaceDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxFaceDetector")
            .field("model_path", &self.model_path)
            .finish_non_exhaustive()
    }
}

impl OnnxFaceDetector {
    /// Loads the model at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::ModelLoadFailed`] if the file is missing or
    /// ONNX Runtime rejects it.
    pub fn load(path: &Path) -> Result<Self, DetectError> {
        if !path.exists() {
            return Err(DetectError::ModelLoadFailed(format!(
                "model not found at {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| DetectError::ModelLoadFailed(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| DetectError::ModelLoadFailed(e.to_string()))?
            .commit_from_file(path)
            .map_err(|e| DetectError::ModelLoadFailed(e.to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            model_path: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl FaceDetector for OnnxFaceDetector {
    fn detect(&self, image: &RawImage) -> Result<Vec<FaceBox>, DetectError> {
        let input = preprocess(image)?;
        let input = input.as_standard_layout().into_owned();

        let mut session = self
            .session
            .lock()
            .map_err(|_| DetectError::InferenceFailed("Lock poisoned".to_string()))?;

        let input_name = session
            .inputs
            .first()
            .map_or_else(|| "input".to_string(), |i| i.name.clone());

        let input_ref = ort::value::TensorRef::from_array_view(&input)
            .map_err(|e| DetectError::InferenceFailed(e.to_string()))?;

        let outputs = session
            .run(ort::inputs![input_name.as_str() => input_ref])
            .map_err(|e| DetectError::InferenceFailed(e.to_string()))?;

        // Output names differ between exports; tell them apart by their last dimension.
        let mut scores = None;
        let mut boxes = None;
        for (_, value) in outputs.iter() {
            let (shape, data) = value
                .try_extract_tensor::<f32>()
                .map_err(|e: ort::Error| DetectError::InferenceFailed(e.to_string()))?;
            match shape.last() {
                Some(2) => scores = Some(data.to_vec()),
                Some(4) => boxes = Some(data.to_vec()),
                _ => {}
            }
        }

        let (scores, boxes) = scores.zip(boxes).ok_or_else(|| {
            DetectError::InferenceFailed("model did not produce scores and boxes".to_string())
        })?;

        Ok(decode_detections(
            &scores,
            &boxes,
            image.width(),
            image.height(),
        ))
    }

    fn name(&self) -> &'static str {
        "ultraface-onnx"
    }
}

/// Resizes the image to the model input and converts it to a normalized
/// NCHW tensor in RGB order.
fn preprocess(image: &RawImage) -> Result<Array4<f32>, DetectError> {
    let rgba = RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())
        .ok_or_else(|| DetectError::InferenceFailed("invalid image buffer".to_string()))?;
    let resized = imageops::resize(&rgba, INPUT_WIDTH, INPUT_HEIGHT, FilterType::Triangle);

    let mut tensor = Array4::<f32>::zeros((1, 3, INPUT_HEIGHT as usize, INPUT_WIDTH as usize));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        tensor[[0, 0, y as usize, x as usize]] = (f32::from(r) - PIXEL_MEAN) / PIXEL_SCALE;
        tensor[[0, 1, y as usize, x as usize]] = (f32::from(g) - PIXEL_MEAN) / PIXEL_SCALE;
        tensor[[0, 2, y as usize, x as usize]] = (f32::from(b) - PIXEL_MEAN) / PIXEL_SCALE;
    }

    Ok(tensor)
}

/// Turns raw model outputs into face boxes in source pixels.
///
/// `scores` holds `[background, face]` pairs and `boxes` holds normalized
/// `[left, top, right, bottom]` quadruples, one per anchor. The result is
/// thresholded, suppressed and sorted by descending score.
fn decode_detections(scores: &[f32], boxes: &[f32], image_width: u32, image_height: u32) -> Vec<FaceBox> {
    let width = image_width as f32;
    let height = image_height as f32;

    let mut candidates: Vec<FaceBox> = scores
        .chunks_exact(2)
        .zip(boxes.chunks_exact(4))
        .filter(|(score, _)| score[1] >= SCORE_THRESHOLD)
        .map(|(score, corners)| {
            let left = corners[0].clamp(0.0, 1.0) * width;
            let top = corners[1].clamp(0.0, 1.0) * height;
            let right = corners[2].clamp(0.0, 1.0) * width;
            let bottom = corners[3].clamp(0.0, 1.0) * height;
            FaceBox::new(left, top, right - left, bottom - top, score[1])
        })
        .filter(|face| face.area() > 0.0)
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut kept: Vec<FaceBox> = Vec::new();
    for candidate in candidates {
        if kept
            .iter()
            .all(|face| face.iou(&candidate) <= NMS_IOU_THRESHOLD)
        {
            kept.push(candidate);
        }
    }
    kept
}
