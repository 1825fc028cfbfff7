// File: crates/pump-chart/src/types.rs
// Summary: Shared types and constants (canvas size, paddings).

/// Logical canvas width. The drawing is stretched to its container by the host.
pub const WIDTH: f64 = 1000.0;
/// Default logical canvas height.
pub const HEIGHT: f64 = 360.0;

/// Canvas margins, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Fixed plot padding carved out of the canvas before plotting.
pub const PADDING: Insets = Insets::new(24.0, 16.0, 24.0, 36.0);

impl Default for Insets {
    fn default() -> Self {
        PADDING
    }
}
