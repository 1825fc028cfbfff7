// File: crates/pump-chart/src/grid.rs
// Summary: Equal-interval x placement for ordered samples.

/// Horizontal distance between neighbouring samples spanning `span` units.
/// A single sample (or none) has no interval.
pub fn step(span: f64, count: usize) -> f64 {
    if count > 1 { span / (count as f64 - 1.0) } else { 0.0 }
}
