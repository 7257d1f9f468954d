// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for rendering and encoding exports.
//!
//! Measures the performance of:
//! - Preview rendering at canvas size
//! - Full export rendering at the HD and Ultra HD presets
//! - PNG encoding of an Ultra HD render

use criterion::{criterion_group, criterion_main, Criterion};
use dp_framer::domain::view::ViewState;
use dp_framer::media::export::encode_png;
use dp_framer::media::{Composition, FrameOverlay, SourceImage};
use std::hint::black_box;

fn composition() -> Composition {
    let (width, height) = (1600, 1200);
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128, 255]);
        }
    }
    let source = SourceImage::from_rgba(width, height, pixels).expect("source");
    let mut view = ViewState::for_image(500, width, height);
    view.user_scale = 1.4;
    view.pan_by(25.0, -10.0);

    Composition {
        source,
        frame: FrameOverlay::embedded(2048).ok(),
        view,
        canvas_size: 500,
    }
}

fn export_render_benchmark(c: &mut Criterion) {
    let composition = composition();
    let mut group = c.benchmark_group("export_render");
    group.sample_size(10);

    group.bench_function("preview_500", |b| {
        b.iter(|| black_box(composition.render(500).unwrap()));
    });

    for size in [1080u32, 2048] {
        group.bench_function(format!("render_{size}"), |b| {
            b.iter(|| black_box(composition.render(size).unwrap()));
        });
    }

    let ultra_hd = composition.render(2048).unwrap();
    group.bench_function("encode_png_2048", |b| {
        b.iter(|| black_box(encode_png(&ultra_hd).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, export_render_benchmark);
criterion_main!(benches);
