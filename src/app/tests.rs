// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::config::defaults::DEFAULT_CANVAS_SIZE;
use crate::domain::geometry::Point;
use crate::domain::media::FaceBox;
use crate::error::Error;
use crate::media::SourceImage;
use crate::test_utils::assert_abs_diff_eq;
use crate::ui::design_tokens::spacing;
use crate::ui::pointer::PointerMessage;
use tempfile::{tempdir, TempDir};

fn app() -> (TempDir, App) {
    let config_dir = tempdir().expect("failed to create temp dir");
    let (app, _task) = App::new(Flags {
        config_dir: Some(config_dir.path().to_path_buf()),
        ..Flags::default()
    });
    (config_dir, app)
}

fn sample_source(width: u32, height: u32) -> SourceImage {
    SourceImage::from_rgba(width, height, vec![200u8; (width * height * 4) as usize])
        .expect("source")
}

fn load(app: &mut App, source: SourceImage) {
    let _ = app.update(Message::ImageLoaded {
        path: PathBuf::from("photo.png"),
        result: Ok(source),
    });
}

#[test]
fn new_app_starts_empty() {
    let (_dir, app) = app();
    assert!(!app.editor().is_loaded());
    assert_eq!(app.resolution().pixels(), 1080);
    assert!(app.preview.is_some());
    assert!(app.status().is_none());
}

#[test]
fn config_warning_is_shown() {
    let config_dir = tempdir().expect("failed to create temp dir");
    std::fs::write(config_dir.path().join("settings.toml"), "not = valid = toml").unwrap();

    let (app, _task) = App::new(Flags {
        config_dir: Some(config_dir.path().to_path_buf()),
        ..Flags::default()
    });
    assert!(matches!(app.status(), Some(Status::Error(_))));
    assert_eq!(app.editor().canvas_size(), 500);
}

#[test]
fn image_loaded_ok_sets_state() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(1000, 500));

    assert!(app.editor().is_loaded());
    assert!(!app.loading);
    assert_abs_diff_eq!(app.editor().view_state().unwrap().base_scale, 1.0);
}

#[test]
fn image_loaded_err_preserves_previous_image() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(100, 100));

    let _ = app.update(Message::ImageLoaded {
        path: PathBuf::from("broken.png"),
        result: Err(Error::Decode("bad header".into())),
    });

    assert_eq!(app.editor().source().unwrap().width(), 100);
    assert!(!app.loading);
    assert!(app.status().is_none());
}

#[test]
fn zoom_changes_are_clamped() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(100, 100));

    let _ = app.update(Message::ZoomChanged(2.0));
    assert_abs_diff_eq!(app.editor().user_scale(), 2.0);
    let _ = app.update(Message::ZoomChanged(10.0));
    assert_abs_diff_eq!(app.editor().user_scale(), 3.0);
}

#[test]
fn pointer_drag_pans_image() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(1000, 500));

    let _ = app.update(Message::Pointer(PointerMessage::Pressed { x: 100.0, y: 100.0 }));
    let _ = app.update(Message::Pointer(PointerMessage::Moved { x: 130.0, y: 115.0 }));
    let _ = app.update(Message::Pointer(PointerMessage::Released));
    let _ = app.update(Message::Pointer(PointerMessage::Moved { x: 300.0, y: 300.0 }));

    assert_eq!(
        app.editor().view_state().unwrap().offset(),
        Point::new(30.0, 15.0)
    );
}

#[test]
fn stale_faces_are_ignored() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(1000, 500));
    let stale = app.editor().generation();
    load(&mut app, sample_source(1000, 500));

    let face = FaceBox::new(600.0, 100.0, 100.0, 100.0, 0.9);
    let _ = app.update(Message::FacesDetected {
        generation: stale,
        faces: vec![face],
    });
    assert_eq!(app.editor().view_state().unwrap().offset(), Point::default());

    let _ = app.update(Message::FacesDetected {
        generation: app.editor().generation(),
        faces: vec![face],
    });
    assert_eq!(
        app.editor().view_state().unwrap().offset(),
        Point::new(-150.0, 100.0)
    );
}

#[test]
fn faces_after_user_pan_are_ignored() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(1000, 500));
    let generation = app.editor().generation();

    let _ = app.update(Message::Pointer(PointerMessage::Pressed { x: 10.0, y: 10.0 }));
    let _ = app.update(Message::Pointer(PointerMessage::Moved { x: 30.0, y: 10.0 }));
    let _ = app.update(Message::Pointer(PointerMessage::Released));

    let _ = app.update(Message::FacesDetected {
        generation,
        faces: vec![FaceBox::new(600.0, 100.0, 100.0, 100.0, 0.9)],
    });
    assert_eq!(
        app.editor().view_state().unwrap().offset(),
        Point::new(20.0, 0.0)
    );
}

#[test]
fn minimum_window_fits_default_preview() {
    let settings = window_settings();
    let min = settings.min_size.expect("minimum size");
    let preview = DEFAULT_CANVAS_SIZE as f32 + 2.0 * spacing::LG;

    assert!(min.width >= preview);
    assert!(min.height > preview);
    assert!(settings.size.width >= min.width);
    assert!(settings.size.height >= min.height);
}

#[test]
fn quality_selection_accepts_only_presets() {
    let (_dir, mut app) = app();
    let _ = app.update(Message::QualitySelected(2048));
    assert_eq!(app.resolution().pixels(), 2048);

    let _ = app.update(Message::QualitySelected(777));
    assert_eq!(app.resolution().pixels(), 2048);
}

#[test]
fn export_without_image_is_a_no_op() {
    let (_dir, mut app) = app();
    let _ = app.update(Message::ExportRequested);
    assert!(!app.exporting);
    assert!(matches!(app.status(), Some(Status::Info(_))));
}

#[test]
fn export_failure_is_reported() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(100, 100));
    let _ = app.update(Message::ExportRequested);
    assert!(app.exporting);

    let _ = app.update(Message::ExportCompleted(Err(Error::Io("disk full".into()))));
    assert!(!app.exporting);
    assert!(matches!(app.status(), Some(Status::Error(msg)) if msg.contains("disk full")));
}

#[test]
fn reset_view_restores_cover_fit() {
    let (_dir, mut app) = app();
    load(&mut app, sample_source(100, 100));
    let _ = app.update(Message::ZoomChanged(2.5));
    let _ = app.update(Message::ResetView);
    assert_abs_diff_eq!(app.editor().user_scale(), 1.0);
}
