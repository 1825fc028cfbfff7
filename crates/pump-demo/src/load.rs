// File: crates/pump-demo/src/load.rs
// Summary: Input loaders for the CLI (stats/history JSON, label/value CSV).

use std::path::Path;

use anyhow::{Context, Result};
use pump_chart::DataPoint;
use pump_stats::{HistoryItem, StatsSummary};

pub fn load_summary(path: &Path) -> Result<StatsSummary> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    StatsSummary::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_history(path: &Path) -> Result<Vec<HistoryItem>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    HistoryItem::list_from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Load `label,value` rows. Header names are matched loosely; without a
/// recognizable label column every point is unlabeled. Non-finite values
/// are rejected.
pub fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    points_from_reader(&mut rdr)
}

pub fn points_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<DataPoint>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "day", "date", "name", "template"]);
    let i_value = idx(&["value", "count", "profit", "v"])
        .context("no value column (expected one of value, count, profit)")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = rec.get(i_value).unwrap_or_default();
        let value: f64 = raw
            .parse()
            .with_context(|| format!("row {}: value `{raw}` is not a number", row + 1))?;
        let label = i_label.and_then(|i| rec.get(i)).filter(|s| !s.is_empty()).map(str::to_string);
        out.push(DataPoint { label, value });
    }
    Ok(DataPoint::checked(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(text.as_bytes())
    }

    #[test]
    fn reads_labeled_points() {
        let pts = points_from_reader(&mut reader("day,count\n09-13,2\n09-14, 5\n,1\n")).expect("points");
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], DataPoint::labeled("09-14", 5.0));
        assert_eq!(pts[2].label, None);
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = points_from_reader(&mut reader("label,value\na,1\nb,NaN\n")).unwrap_err();
        assert!(err.to_string().contains("index 1"), "{err}");
    }

    #[test]
    fn requires_value_column() {
        assert!(points_from_reader(&mut reader("label,amount\na,1\n")).is_err());
    }
}
