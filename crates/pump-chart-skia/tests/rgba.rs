// File: crates/pump-chart-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use pump_chart::{AreaChart, Color};
use pump_chart_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_rgba8_buffer() {
    let drawing = AreaChart::new([1.0, 1.0]).with_fill(Color::rgb(255, 0, 0)).render();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&drawing, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);

    // Middle of the plot, well inside the filled area: solid red fill
    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    assert_eq!(at(500, 200), &[255, 0, 0, 255]);
    // Below the baseline stays background
    assert_eq!(at(500, 340), &[18, 18, 20, 255]);
}

#[test]
fn scale_doubles_surface() {
    let drawing = AreaChart::new([3.0, 1.0, 2.0]).render();
    let opts = RenderOptions { scale: 2.0, draw_labels: false, ..RenderOptions::default() };
    let (_, w, h, _) = SkiaRenderer::new().render_to_rgba8(&drawing, &opts).expect("rgba render");
    assert_eq!((w, h), (2000, 720));
}
