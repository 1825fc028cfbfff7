// File: crates/pump-chart-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pump_chart::{AreaChart, DataPoint};
use pump_chart_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_smoke_png() {
    let chart = AreaChart::new(vec![
        DataPoint::labeled("09-10", 0.0),
        DataPoint::labeled("09-11", 2.0),
        DataPoint::labeled("09-12", 1.0),
        DataPoint::labeled("09-13", 3.5),
        DataPoint::labeled("09-14", 2.5),
    ]);
    let drawing = chart.render();
    let renderer = SkiaRenderer::new();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&drawing, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_to_png_bytes(&drawing, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1000, 360));
}

#[test]
fn empty_chart_is_plain_background() {
    let drawing = AreaChart::new(Vec::<DataPoint>::new()).render();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&drawing, &opts).expect("rgba render");
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);
    // transparent backdrop leaves the near-black background untouched everywhere
    assert!(px.chunks_exact(4).all(|c| c == [18, 18, 20, 255]));
}
