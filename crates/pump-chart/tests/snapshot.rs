// File: crates/pump-chart/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// - The blessed file lives in tests/__snapshots__ and is kept under version control.

use pump_chart::{AreaChart, DataPoint};

fn render_svg() -> String {
    AreaChart::new(vec![
        DataPoint::labeled("09-10", 2.0),
        DataPoint::labeled("09-11", 4.0),
        DataPoint::labeled("09-12", 0.0),
        DataPoint::labeled("09-13", 3.0),
        DataPoint::labeled("09-14", 1.0),
    ])
    .to_svg()
}

#[test]
fn golden_basic_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn svg_file_written_to_disk() {
    let out = std::path::PathBuf::from("target/test_out/area.svg");
    AreaChart::new([1.0, 3.0, 2.0]).render_to_svg(&out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("output exists");
    assert!(text.starts_with("<svg"));
    assert!(text.trim_end().ends_with("</svg>"));
}
