// File: crates/pump-chart/src/lib.rs
// Summary: Core library entry point; exports the area chart model, layout and drawing API.

pub mod chart;
pub mod series;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod color;
pub mod path;
pub mod drawing;
pub mod svg;
pub mod error;

pub use chart::{pill_width, AreaChart, AreaLayout};
pub use series::{format_value, DataPoint};
pub use color::Color;
pub use theme::Theme;
pub use path::{PathCommand, PathData};
pub use drawing::{Drawing, Pill, Primitive, Text, TextAnchor};
pub use error::{ChartError, ColorError};
