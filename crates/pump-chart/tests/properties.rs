// File: crates/pump-chart/tests/properties.rs
// Purpose: Geometry and output properties of the area chart renderer.

use pump_chart::{pill_width, AreaChart, DataPoint, Primitive};

fn labeled(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::labeled(format!("d{i}"), v))
        .collect()
}

#[test]
fn line_has_one_vertex_per_point() {
    for n in 1..=12 {
        let values: Vec<f64> = (0..n).map(|i| (i * 7 % 5) as f64).collect();
        let chart = AreaChart::new(labeled(&values));
        let line = chart.line_path().expect("non-empty input has a line");
        assert_eq!(line.vertex_count(), n);
        // area = floor start + every point + floor end
        assert_eq!(chart.area_path().expect("area").vertex_count(), n + 2);
    }
}

#[test]
fn max_value_never_below_one() {
    let cases: Vec<Vec<f64>> = vec![
        vec![],
        vec![0.0],
        vec![0.0, 0.0, 0.0],
        vec![-4.0, -1.0],
        vec![0.2, 0.7],
        vec![f64::NAN],
        vec![12.0, 3.0],
    ];
    for values in cases {
        let l = AreaChart::new(values.clone()).layout();
        assert!(l.max_value >= 1.0, "max {} for {:?}", l.max_value, values);
    }
    assert_eq!(AreaChart::new([12.0, 3.0]).layout().max_value, 12.0);
}

#[test]
fn lone_maximum_sits_at_top_padding() {
    let l = AreaChart::new([5.0]).layout();
    assert_eq!(l.points.len(), 1);
    assert_eq!(l.points[0].y, 24.0);
    assert_eq!(l.points[0].x, 24.0);
}

#[test]
fn two_points_span_inner_width() {
    let l = AreaChart::new([1.0, 2.0]).layout();
    assert_eq!(l.points[0].x, 24.0);
    assert_eq!(l.points[1].x, 984.0);
    assert_eq!(l.step_x, 960.0);
}

#[test]
fn empty_input_draws_only_background() {
    let d = AreaChart::new(Vec::<DataPoint>::new()).render();
    assert_eq!(d.len(), 1);
    match &d.primitives[0] {
        Primitive::Rect { rect, fill } => {
            assert_eq!((rect.left, rect.top, rect.width(), rect.height()), (0.0, 0.0, 1000.0, 360.0));
            assert_eq!(fill.a, 0.0);
        }
        other => panic!("expected background rect, got {}", other.kind()),
    }
    assert!(d.line_path().is_none());
    assert!(d.area_path().is_none());
}

#[test]
fn nan_point_keeps_geometry_but_loses_its_pill() {
    let chart = AreaChart::new(vec![
        DataPoint::labeled("a", 3.0),
        DataPoint::labeled("b", f64::NAN),
        DataPoint::labeled("c", 6.0),
    ]);
    let d = chart.render();
    assert_eq!(d.line_path().expect("line").vertex_count(), 3);
    assert_eq!(d.count("marker"), 3);
    assert_eq!(d.count("pill"), 2);
    assert_eq!(d.count("tick"), 3);
    let contents: Vec<_> = d.pills().map(|p| p.text.content.as_str()).collect();
    assert_eq!(contents, vec!["3", "6"]);

    // re-rendering is byte-identical
    assert_eq!(chart.to_svg(), chart.to_svg());
    assert_eq!(chart.render(), chart.render());
}

#[test]
fn pill_width_tracks_digit_count() {
    assert_eq!(pill_width(100.0), 30.0);
    assert_eq!(pill_width(5.0), 18.0);
    assert_eq!(pill_width(-2.5), 36.0);
}

#[test]
fn primitives_stack_back_to_front() {
    let d = AreaChart::new(labeled(&[1.0, 4.0, 2.0])).render();
    let kinds: Vec<&str> = d.iter().map(|p| p.kind()).collect();
    assert_eq!(
        kinds,
        vec!["rect", "area", "line", "marker", "marker", "marker", "pill", "pill", "pill", "tick", "tick", "tick"]
    );
}

#[test]
fn single_point_degenerates_to_a_sliver() {
    let d = AreaChart::new([7.0]).render();
    assert_eq!(d.area_path().expect("area").to_string(), "M 24 324 L 24 24 L 24 324 Z");
    assert_eq!(d.line_path().expect("line").to_string(), "M 24 24");
    assert_eq!(d.count("marker"), 1);
    assert_eq!(d.count("pill"), 1);
}
