// File: crates/pump-chart/src/error.rs
// Summary: Error types for input validation at the chart boundary.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid color function `{0}`")]
    InvalidFunction(String),
    #[error("unknown color `{0}`")]
    Unknown(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("value at index {index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f64 },
}
