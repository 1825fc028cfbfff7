// File: crates/pump-stats/src/records.rs
// Summary: Records returned by the stats and history endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::StatsError;

pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Below this a timestamp is taken to be in seconds, not milliseconds.
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Moscow offset used for display timestamps.
const MSK_OFFSET_SECS: i32 = 3 * 3600;

pub fn lamports_to_sol(lamports: i64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Normalize a seconds-or-milliseconds epoch value to milliseconds.
pub fn normalize_timestamp_ms(raw: i64) -> i64 {
    if raw < MILLIS_THRESHOLD { raw.saturating_mul(1000) } else { raw }
}

/// UTC calendar day (`YYYY-MM-DD`) of an epoch-millisecond timestamp.
pub fn day_key(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|t| t.format("%Y-%m-%d").to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub by_template: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_day: Option<BTreeMap<String, u64>>,
}

impl StatsSummary {
    pub fn from_json(s: &str) -> Result<Self, StatsError> {
        serde_json::from_str(s).map_err(|source| StatsError::Decode { what: "stats summary", source })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchKind {
    #[default]
    Template,
    Adhoc,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryItem {
    pub template_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: LaunchKind,
    pub name: String,
    pub symbol: String,
    pub mint: String,
    pub pump_url: String,
    pub solscan_url: String,
    pub create_signature: String,
    pub sell_signature: String,
    #[serde(deserialize_with = "lenient_lamports")]
    pub spent_lamports: i64,
    #[serde(deserialize_with = "lenient_lamports")]
    pub received_lamports: i64,
    #[serde(deserialize_with = "lenient_lamports")]
    pub pnl_lamports: i64,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<i64>,
}

/// Any JSON number as an integer; floats are rounded, everything else is `None`.
fn json_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        _ => None,
    }
}

/// Amounts that are `null` or not numbers read as zero.
fn lenient_lamports<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(json_int(&Value::deserialize(d)?).unwrap_or(0))
}

/// Timestamps that are `null` or not numbers read as absent.
fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(json_int(&Value::deserialize(d)?))
}

impl HistoryItem {
    pub fn list_from_json(s: &str) -> Result<Vec<Self>, StatsError> {
        serde_json::from_str(s).map_err(|source| StatsError::Decode { what: "history", source })
    }

    pub fn pnl_sol(&self) -> f64 {
        lamports_to_sol(self.pnl_lamports)
    }

    pub fn spent_sol(&self) -> f64 {
        lamports_to_sol(self.spent_lamports)
    }

    pub fn received_sol(&self) -> f64 {
        lamports_to_sol(self.received_lamports)
    }

    pub fn is_profitable(&self) -> bool {
        self.pnl_lamports >= 0
    }

    /// Creation time in milliseconds; missing or zero timestamps count as absent.
    pub fn created_ms(&self) -> Option<i64> {
        self.created_at.filter(|&t| t != 0).map(normalize_timestamp_ms)
    }

    /// Creation time as `dd/mm/yyyy, HH:MM` in Moscow time.
    pub fn created_msk(&self) -> Option<String> {
        let msk = FixedOffset::east_opt(MSK_OFFSET_SECS)?;
        let t = DateTime::<Utc>::from_timestamp_millis(self.created_ms()?)?;
        Some(t.with_timezone(&msk).format("%d/%m/%Y, %H:%M").to_string())
    }

    pub fn create_tx_url(&self) -> String {
        tx_url(&self.create_signature)
    }

    pub fn sell_tx_url(&self) -> String {
        tx_url(&self.sell_signature)
    }
}

/// Explorer link for a transaction signature.
pub fn tx_url(signature: &str) -> String {
    format!("https://solscan.io/tx/{signature}")
}
