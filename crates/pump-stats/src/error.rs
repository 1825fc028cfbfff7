// File: crates/pump-stats/src/error.rs
// Summary: Errors raised while decoding records or parsing selectors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown date range `{0}` (expected 7d, 30d or all)")]
    UnknownRange(String),
    #[error("unknown metric `{0}` (expected count or profit)")]
    UnknownMetric(String),
}
