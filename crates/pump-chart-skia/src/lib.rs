// File: crates/pump-chart-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes pump-chart drawings on CPU surfaces.

pub mod text;

use anyhow::Result;
use skia_safe as skia;

use pump_chart::{Color, Drawing, PathCommand, PathData, Primitive, Text};

pub use text::TextShaper;

pub struct RenderOptions {
    /// Device pixels per logical unit.
    pub scale: f32,
    /// Opaque fill painted beneath the drawing.
    pub background: Color,
    /// Skip text (value pills keep their shape) for font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: Color::rgb(18, 18, 20), // near-black
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Output surface size in device pixels.
    pub fn surface_size(&self, drawing: &Drawing) -> (i32, i32) {
        let s = self.scale.max(0.01) as f64;
        (
            ((drawing.width * s).round() as i32).max(1),
            ((drawing.height * s).round() as i32).max(1),
        )
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Rasterize into a fresh surface and hand it to `read`.
    fn with_surface<T>(
        &self,
        drawing: &Drawing,
        opts: &RenderOptions,
        read: impl FnOnce(&mut skia::Surface, i32, i32) -> Result<T>,
    ) -> Result<T> {
        let (w, h) = opts.surface_size(drawing);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        {
            let canvas = surface.canvas();
            canvas.clear(to_skia(opts.background));
            canvas.save();
            canvas.scale((opts.scale, opts.scale));
            self.paint(canvas, drawing, opts);
            canvas.restore();
        }
        tracing::debug!(width = w, height = h, primitives = drawing.len(), "rasterized drawing");
        read(&mut surface, w, h)
    }

    /// Render to a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, drawing: &Drawing, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.with_surface(drawing, opts, |surface, w, h| {
            let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
            let stride = w as usize * 4;
            let mut pixels = vec![0u8; stride * h as usize];
            if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
                anyhow::bail!("read_pixels failed");
            }
            Ok((pixels, w, h, stride))
        })
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, drawing: &Drawing, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.with_surface(drawing, opts, |surface, _, _| {
            let image = surface.image_snapshot();
            #[allow(deprecated)]
            let data = image
                .encode_to_data(skia::EncodedImageFormat::PNG)
                .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
            Ok(data.as_bytes().to_vec())
        })
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        drawing: &Drawing,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(drawing, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, drawing: &Drawing, opts: &RenderOptions) {
        for p in drawing {
            match p {
                Primitive::Rect { rect, fill } => {
                    let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                    canvas.draw_rect(r, &fill_paint(*fill));
                }
                Primitive::Area { path, fill } => {
                    canvas.draw_path(&to_skia_path(path, false), &fill_paint(*fill));
                }
                Primitive::Line { path, stroke, width } => {
                    let mut paint = fill_paint(*stroke);
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(*width as f32);
                    paint.set_stroke_join(skia::paint::Join::Round);
                    canvas.draw_path(&to_skia_path(path, true), &paint);
                }
                Primitive::Marker { center, radius, fill } => {
                    if center.x.is_finite() && center.y.is_finite() {
                        canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, &fill_paint(*fill));
                    }
                }
                Primitive::Pill(pill) => {
                    let r = &pill.rect;
                    if !(r.top.is_finite() && r.left.is_finite()) {
                        continue;
                    }
                    let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
                    let paint = fill_paint(pill.fill.with_opacity(pill.opacity));
                    canvas.draw_round_rect(rect, pill.radius as f32, pill.radius as f32, &paint);
                    if opts.draw_labels {
                        self.draw_text(canvas, &pill.text, true);
                    }
                }
                Primitive::Tick(t) => {
                    if opts.draw_labels {
                        self.draw_text(canvas, t, false);
                    }
                }
            }
        }
    }

    fn draw_text(&self, canvas: &skia::Canvas, t: &Text, mono_numeric: bool) {
        self.shaper.draw_anchored(
            canvas,
            &t.content,
            t.position.x as f32,
            t.position.y as f32,
            t.anchor,
            t.size as f32,
            to_skia(t.fill),
            mono_numeric,
        );
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(c));
    paint
}

/// Convert path data, dropping non-finite vertices. With `split_on_gap`,
/// the vertex after a dropped one starts a new contour instead of joining.
fn to_skia_path(data: &PathData, split_on_gap: bool) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for cmd in data.commands() {
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                if !(p.x.is_finite() && p.y.is_finite()) {
                    if split_on_gap {
                        pen_down = false;
                    }
                    continue;
                }
                let starts = matches!(cmd, PathCommand::MoveTo(_)) || !pen_down;
                if starts {
                    path.move_to((p.x as f32, p.y as f32));
                } else {
                    path.line_to((p.x as f32, p.y as f32));
                }
                pen_down = true;
            }
            PathCommand::Close => {
                if pen_down {
                    path.close();
                }
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pump_chart::AreaChart;

    #[test]
    fn surface_size_follows_scale() {
        let d = AreaChart::new([1.0]).render();
        let mut opts = RenderOptions::default();
        assert_eq!(opts.surface_size(&d), (1000, 360));
        opts.scale = 2.0;
        assert_eq!(opts.surface_size(&d), (2000, 720));
    }

    #[test]
    fn nan_vertex_splits_line_contour() {
        let chart = AreaChart::new([1.0, f64::NAN, 2.0, 3.0]);
        let path = to_skia_path(&chart.line_path().expect("line"), true);
        assert_eq!(path.count_points(), 3);
        assert!(path.bounds().is_finite());
    }

    #[test]
    fn color_conversion_keeps_alpha() {
        let c = to_skia(Color::rgba(106, 92, 255, 0.25));
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (64, 106, 92, 255));
    }
}
