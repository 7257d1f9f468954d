// SPDX-License-Identifier: MPL-2.0
//! Image loading, frame overlay, compositing and PNG export.

pub mod compose;
pub mod export;
pub mod frame;
pub mod image;

pub use compose::Composition;
pub use export::{encode_png, export_to_directory, ExportResolution, EXPORT_FILE_PREFIX};
pub use frame::{resolve_frame, FrameOverlay};
pub use image::{decode_source_image, load_source_image, SourceImage, SUPPORTED_EXTENSIONS};
