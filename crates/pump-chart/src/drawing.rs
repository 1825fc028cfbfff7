// File: crates/pump-chart/src/drawing.rs
// Summary: Renderer-agnostic drawing: ordered primitives in logical units.
// Notes:
// - Primitives are stored back-to-front; backends paint them in order.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::path::PathData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A single line of text; `position.y` is the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub position: Point,
    pub content: String,
    pub size: f64,
    pub fill: Color,
    pub anchor: TextAnchor,
}

/// Rounded-rect value label with its text.
#[derive(Clone, Debug, PartialEq)]
pub struct Pill {
    pub rect: Rect,
    pub radius: f64,
    pub fill: Color,
    pub opacity: f64,
    pub text: Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Plain filled rectangle (the hit-test backdrop).
    Rect { rect: Rect, fill: Color },
    /// Filled, unstroked region.
    Area { path: PathData, fill: Color },
    /// Stroked, unfilled polyline.
    Line { path: PathData, stroke: Color, width: f64 },
    Marker { center: Point, radius: f64, fill: Color },
    Pill(Pill),
    Tick(Text),
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Rect { .. } => "rect",
            Primitive::Area { .. } => "area",
            Primitive::Line { .. } => "line",
            Primitive::Marker { .. } => "marker",
            Primitive::Pill(_) => "pill",
            Primitive::Tick(_) => "tick",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Number of primitives of the given `kind()`.
    pub fn count(&self, kind: &str) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    pub fn line_path(&self) -> Option<&PathData> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Line { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn area_path(&self) -> Option<&PathData> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Area { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn pills(&self) -> impl Iterator<Item = &Pill> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Pill(pill) => Some(pill),
            _ => None,
        })
    }

    pub fn ticks(&self) -> impl Iterator<Item = &Text> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Tick(t) => Some(t),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;
    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
