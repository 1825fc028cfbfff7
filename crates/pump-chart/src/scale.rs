// File: crates/pump-chart/src/scale.rs
// Summary: Index (X) and zero-based value (Y) scale transforms.

/// Largest finite value in `values`, clamped to at least 1.
/// Non-finite entries never raise the scale.
pub fn clamped_max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(1.0f64, f64::max)
}

/// Horizontal scale placing sample `i` at `left_px + i * step`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub step: f64,
}

impl IndexScale {
    pub fn new(left_px: f64, width_px: f64, count: usize) -> Self {
        Self { left_px, step: crate::grid::step(width_px, count) }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.step
    }
}

/// Vertical scale mapping `0..=max_value` to `[bottom, top]` pixels.
/// Values at or below zero land on or below the baseline; nothing is clamped.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub max_value: f64,
}

impl ValueScale {
    pub fn zero_based<I: IntoIterator<Item = f64>>(top_px: f64, bottom_px: f64, values: I) -> Self {
        Self { top_px, bottom_px, max_value: clamped_max(values) }
    }
    #[inline]
    pub fn inner_height(&self) -> f64 {
        self.bottom_px - self.top_px
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let h = self.inner_height();
        self.top_px + (h - (v / self.max_value) * h)
    }
}
