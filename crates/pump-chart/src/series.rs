// File: crates/pump-chart/src/series.rs
// Summary: Data model for area chart samples.
// Notes:
// - Order of a `DataPoint` sequence defines the x-axis order; nothing here sorts.
// - Non-finite values are tolerated by the renderer. `checked` is the opt-in
//   gate for callers that prefer to reject them up front.

use crate::error::ChartError;

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: Option<String>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { label: None, value }
    }

    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self { label: Some(label.into()), value }
    }

    /// Label if present and non-empty.
    pub fn tick_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|s| !s.is_empty())
    }

    /// Reject any non-finite value, reporting the first offending index.
    pub fn checked(points: Vec<DataPoint>) -> Result<Vec<DataPoint>, ChartError> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.value.is_finite()) {
            return Err(ChartError::NonFiniteValue { index, value: p.value });
        }
        Ok(points)
    }
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self { Self::new(value) }
}

impl<S: Into<String>> From<(S, f64)> for DataPoint {
    fn from((label, value): (S, f64)) -> Self { Self::labeled(label, value) }
}

/// Shortest decimal representation of `v` that round-trips.
/// Negative zero prints as `0`; non-finite values print as `NaN` / `Infinity`.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    format!("{v}")
}
