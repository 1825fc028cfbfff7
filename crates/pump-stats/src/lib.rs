// File: crates/pump-stats/src/lib.rs
// Summary: Stats shaping entry point; decodes backend records and turns them into chart points.

pub mod aggregate;
pub mod error;
pub mod records;

pub use aggregate::{
    day_points, merge_days, profit_by_day, stats_points, template_points, DateRange, DayRow, Metric,
};
pub use error::StatsError;
pub use records::{
    day_key, lamports_to_sol, normalize_timestamp_ms, tx_url, HistoryItem, LaunchKind, StatsSummary,
};
