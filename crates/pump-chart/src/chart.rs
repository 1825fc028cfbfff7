// File: crates/pump-chart/src/chart.rs
// Summary: Area chart: layout of ordered samples and conversion to a `Drawing`.

use anyhow::Result;

use crate::color::Color;
use crate::drawing::{Drawing, Pill, Primitive, Text, TextAnchor};
use crate::geometry::{Point, Rect};
use crate::path::PathData;
use crate::scale::{IndexScale, ValueScale};
use crate::series::{format_value, DataPoint};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, PADDING, WIDTH};

pub const LINE_WIDTH: f64 = 3.0;
pub const MARKER_RADIUS: f64 = 4.0;
pub const PILL_HEIGHT: f64 = 18.0;
pub const PILL_RADIUS: f64 = 6.0;
pub const PILL_OPACITY: f64 = 0.9;
/// Pill top edge sits this far above its point.
pub const PILL_OFFSET: f64 = 26.0;
/// Pill text baseline sits this far above its point.
pub const PILL_TEXT_OFFSET: f64 = 13.0;
pub const VALUE_FONT_SIZE: f64 = 10.0;
pub const TICK_FONT_SIZE: f64 = 11.0;
/// Tick baseline sits this far above the canvas bottom edge.
pub const TICK_OFFSET: f64 = 10.0;

const DIGIT_WIDTH: f64 = 6.0;
const PILL_PADDING: f64 = 12.0;

/// Pill width for `value`: six units per character of its decimal text plus padding.
pub fn pill_width(value: f64) -> f64 {
    format_value(value).chars().count() as f64 * DIGIT_WIDTH + PILL_PADDING
}

/// Geometry of one render pass. Recomputed from scratch every time.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaLayout {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    pub inner: Rect,
    /// Largest finite value, at least 1. Infinite samples plot off-canvas instead of rescaling.
    pub max_value: f64,
    pub step_x: f64,
    /// Plotted positions, index-aligned with the input points.
    pub points: Vec<Point>,
}

impl AreaLayout {
    /// Y coordinate of the plot floor (value zero).
    pub fn baseline(&self) -> f64 {
        self.inner.bottom
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AreaChart {
    pub points: Vec<DataPoint>,
    pub height: f64,
    pub theme: Theme,
}

impl AreaChart {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            height: HEIGHT,
            theme: Theme::default(),
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.theme.stroke = stroke;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.theme.fill = fill;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn layout(&self) -> AreaLayout {
        let insets = PADDING;
        let inner = Rect::from_ltrb(
            insets.left,
            insets.top,
            WIDTH - insets.right,
            self.height - insets.bottom,
        );
        let xs = IndexScale::new(inner.left, inner.width(), self.points.len());
        let ys = ValueScale::zero_based(inner.top, inner.bottom, self.points.iter().map(|p| p.value));

        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(xs.to_px(i), ys.to_px(p.value)))
            .collect();

        AreaLayout {
            width: WIDTH,
            height: self.height,
            insets,
            inner,
            max_value: ys.max_value,
            step_x: xs.step,
            points,
        }
    }

    /// Polyline through every point, or `None` when there are no points.
    pub fn line_path(&self) -> Option<PathData> {
        line_path(&self.layout())
    }

    /// Closed region between the polyline and the baseline, or `None` when empty.
    pub fn area_path(&self) -> Option<PathData> {
        area_path(&self.layout())
    }

    pub fn render(&self) -> Drawing {
        let layout = self.layout();
        let theme = &self.theme;
        let mut drawing = Drawing::new(layout.width, layout.height);

        drawing.push(Primitive::Rect {
            rect: Rect::from_xywh(0.0, 0.0, layout.width, layout.height),
            fill: Color::TRANSPARENT,
        });

        if let Some(path) = area_path(&layout) {
            drawing.push(Primitive::Area { path, fill: theme.fill });
        }
        if let Some(path) = line_path(&layout) {
            drawing.push(Primitive::Line { path, stroke: theme.stroke, width: LINE_WIDTH });
        }

        for &center in &layout.points {
            drawing.push(Primitive::Marker { center, radius: MARKER_RADIUS, fill: theme.stroke });
        }

        for (p, &at) in self.points.iter().zip(&layout.points) {
            if !p.value.is_finite() {
                continue;
            }
            let w = pill_width(p.value);
            drawing.push(Primitive::Pill(Pill {
                rect: Rect::from_xywh(at.x - w / 2.0, at.y - PILL_OFFSET, w, PILL_HEIGHT),
                radius: PILL_RADIUS,
                fill: theme.stroke,
                opacity: PILL_OPACITY,
                text: Text {
                    position: Point::new(at.x, at.y - PILL_TEXT_OFFSET),
                    content: format_value(p.value),
                    size: VALUE_FONT_SIZE,
                    fill: theme.pill_text,
                    anchor: TextAnchor::Middle,
                },
            }));
        }

        for (p, &at) in self.points.iter().zip(&layout.points) {
            if let Some(label) = p.tick_label() {
                drawing.push(Primitive::Tick(Text {
                    position: Point::new(at.x, layout.height - TICK_OFFSET),
                    content: label.to_string(),
                    size: TICK_FONT_SIZE,
                    fill: theme.tick_label,
                    anchor: TextAnchor::Middle,
                }));
            }
        }

        drawing
    }

    /// Render and serialize as an SVG document.
    pub fn to_svg(&self) -> String {
        self.render().to_svg()
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let svg = self.to_svg();
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, svg)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn line_path(layout: &AreaLayout) -> Option<PathData> {
    let (first, rest) = layout.points.split_first()?;
    let mut path = PathData::new();
    path.move_to(*first);
    for &p in rest {
        path.line_to(p);
    }
    Some(path)
}

fn area_path(layout: &AreaLayout) -> Option<PathData> {
    let first = layout.points.first()?;
    let last = layout.points.last()?;
    let floor = layout.baseline();
    let mut path = PathData::new();
    path.move_to(Point::new(first.x, floor));
    for &p in &layout.points {
        path.line_to(p);
    }
    path.line_to(Point::new(last.x, floor)).close();
    Some(path)
}
