// File: crates/pump-stats/src/aggregate.rs
// Summary: Per-day and per-template aggregation into chart points.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use pump_chart::DataPoint;

use crate::error::StatsError;
use crate::records::{day_key, HistoryItem, StatsSummary};

/// One calendar day of activity.
#[derive(Clone, Debug, PartialEq)]
pub struct DayRow {
    /// `YYYY-MM-DD`
    pub day: String,
    pub count: u64,
    /// Profit in SOL.
    pub profit: f64,
}

impl DayRow {
    /// Day without the year, used as the x-axis label.
    pub fn short_label(&self) -> &str {
        self.day.get(5..).unwrap_or(&self.day)
    }
}

/// Sum of realized profit (SOL) per UTC day. Items without a creation time are skipped.
pub fn profit_by_day(history: &[HistoryItem]) -> BTreeMap<String, f64> {
    let mut map = BTreeMap::new();
    for item in history {
        let Some(key) = item.created_ms().and_then(day_key) else { continue };
        *map.entry(key).or_insert(0.0) += item.pnl_sol();
    }
    map
}

/// Union of the days counted by the backend and the days with profit,
/// ascending by day. Missing sides default to zero.
pub fn merge_days(summary: &StatsSummary, profit: &BTreeMap<String, f64>) -> Vec<DayRow> {
    let counts = summary.by_day.as_ref();
    let mut days: BTreeSet<&str> = profit.keys().map(String::as_str).collect();
    if let Some(m) = counts {
        days.extend(m.keys().map(String::as_str));
    }
    days.into_iter()
        .map(|day| DayRow {
            day: day.to_string(),
            count: counts.and_then(|m| m.get(day)).copied().unwrap_or(0),
            profit: profit.get(day).copied().unwrap_or(0.0),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    Week,
    Month,
    #[default]
    All,
}

impl DateRange {
    /// Keep only the most recent rows covered by this range.
    pub fn apply<'a>(&self, rows: &'a [DayRow]) -> &'a [DayRow] {
        let keep = match self {
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::All => return rows,
        };
        &rows[rows.len().saturating_sub(keep)..]
    }
}

impl FromStr for DateRange {
    type Err = StatsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(DateRange::Week),
            "30d" => Ok(DateRange::Month),
            "all" => Ok(DateRange::All),
            other => Err(StatsError::UnknownRange(other.to_string())),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateRange::Week => "7d",
            DateRange::Month => "30d",
            DateRange::All => "all",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Count,
    Profit,
}

impl FromStr for Metric {
    type Err = StatsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(Metric::Count),
            "profit" => Ok(Metric::Profit),
            other => Err(StatsError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Count => "count",
            Metric::Profit => "profit",
        })
    }
}

/// Round to four decimals, the precision profit is shown with.
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

pub fn day_points(rows: &[DayRow], metric: Metric) -> Vec<DataPoint> {
    rows.iter()
        .map(|r| {
            let value = match metric {
                Metric::Count => r.count as f64,
                Metric::Profit => round4(r.profit),
            };
            DataPoint::labeled(r.short_label(), value)
        })
        .collect()
}

/// One point per template, in name order.
pub fn template_points(summary: &StatsSummary) -> Vec<DataPoint> {
    summary
        .by_template
        .iter()
        .map(|(name, &count)| DataPoint::labeled(name.as_str(), count as f64))
        .collect()
}

/// Full pipeline used by the stats screen: merge, filter, convert.
pub fn stats_points(
    summary: &StatsSummary,
    history: &[HistoryItem],
    range: DateRange,
    metric: Metric,
) -> Vec<DataPoint> {
    let rows = merge_days(summary, &profit_by_day(history));
    day_points(range.apply(&rows), metric)
}
