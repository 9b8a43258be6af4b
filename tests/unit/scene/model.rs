use super::*;
use serde_json::json;

fn snapshot(v: serde_json::Value) -> PathSnapshot {
    PathSnapshot::parse(&v.to_string())
}

#[test]
fn absent_fields_take_editor_defaults() {
    let snap = snapshot(json!({
        "paths": [{"points": [{"x": 1, "y": 2}]}],
        "canvas_size": {"width": 512, "height": 512}
    }));
    let p = &snap.paths[0];
    assert_eq!(p.start_time, 0.0);
    assert_eq!(p.end_time, 1.0);
    assert_eq!(p.interpolation, Interpolation::Linear);
    assert_eq!(p.visibility_mode, VisibilityMode::Pop);
    assert!(!p.is_single_point);
    assert_eq!(p.name, "Untitled");
}

#[test]
fn decodes_camel_case_fields_and_ignores_extras() {
    let snap = snapshot(json!({
        "paths": [{
            "points": [{"x": 0.5, "y": 1.5, "pressure": 0.3}],
            "startTime": 0.2,
            "endTime": 0.4,
            "interpolation": "ease-out",
            "visibilityMode": "static",
            "isSinglePoint": true,
            "name": "anchor",
            "color": "#ff0000"
        }]
    }));
    let p = &snap.paths[0];
    assert_eq!(p.points, vec![Point::new(0.5, 1.5)]);
    assert_eq!(p.start_time, 0.2);
    assert_eq!(p.end_time, 0.4);
    assert_eq!(p.interpolation, Interpolation::EaseOut);
    assert_eq!(p.visibility_mode, VisibilityMode::Static);
    assert!(p.is_single_point);
    assert_eq!(p.name, "anchor");
}

#[test]
fn unknown_visibility_mode_is_fallback() {
    let snap = snapshot(json!({
        "paths": [{"points": [{"x": 0, "y": 0}], "visibilityMode": "fade"}]
    }));
    assert_eq!(snap.paths[0].visibility_mode, VisibilityMode::Fallback);
}

#[test]
fn malformed_payload_becomes_empty() {
    assert_eq!(PathSnapshot::parse("{not json"), PathSnapshot::default());
    assert_eq!(
        PathSnapshot::parse(r#"{"paths": "nope"}"#),
        PathSnapshot::default()
    );
    assert!(PathSnapshot::parse("{}").paths.is_empty());
}

#[test]
fn null_fields_take_defaults_instead_of_dropping_paths() {
    let snap = snapshot(json!({
        "paths": [
            {"points": [{"x": 1, "y": 1}], "name": "first"},
            {
                "points": [{"x": 2, "y": 2}, {"x": 3, "y": 3}],
                "name": null,
                "interpolation": null,
                "isSinglePoint": null,
                "visibilityMode": null,
                "endTime": null
            }
        ]
    }));
    assert_eq!(snap.paths.len(), 2);
    assert_eq!(snap.paths[0].name, "first");
    let p = &snap.paths[1];
    assert_eq!(p.name, "Untitled");
    assert_eq!(p.interpolation, Interpolation::Linear);
    assert!(!p.is_single_point);
    assert_eq!(p.visibility_mode, VisibilityMode::Pop);
    assert_eq!(p.end_time, 1.0);
}

#[test]
fn one_broken_path_does_not_drop_the_others() {
    let snap = snapshot(json!({
        "paths": [
            {"points": "not a list"},
            {"points": [{"x": 5, "y": 6}], "startTime": "soon"},
            {"points": [{"x": 7, "y": 8}]}
        ],
        "canvas_size": {"width": 100, "height": 100}
    }));
    assert_eq!(snap.paths.len(), 1);
    assert_eq!(snap.paths[0].points, vec![Point::new(7.0, 8.0)]);
    assert!(snap.canvas_size.is_some());
    assert!(PathSnapshot::parse(r#"{"paths": null}"#).paths.is_empty());
}

#[test]
fn scales_axes_independently() {
    let snap = snapshot(json!({
        "paths": [{"points": [{"x": 100, "y": 100}, {"x": 200, "y": 50}]}],
        "canvas_size": {"width": 200, "height": 400}
    }));
    let scaled = snap.to_frame_space(FrameSize::new(400, 200));
    assert_eq!(
        scaled[0].points,
        vec![Point::new(200.0, 50.0), Point::new(400.0, 25.0)]
    );
}

#[test]
fn missing_or_degenerate_canvas_scales_by_one() {
    let snap = snapshot(json!({"paths": []}));
    assert_eq!(snap.scale_to(FrameSize::new(300, 200)), (1.0, 1.0));

    let snap = snapshot(json!({"paths": [], "canvas_size": {"width": 0, "height": 100}}));
    assert_eq!(snap.scale_to(FrameSize::new(300, 200)), (1.0, 2.0));

    let snap = snapshot(json!({"paths": [], "canvas_size": {"width": 150}}));
    assert_eq!(snap.scale_to(FrameSize::new(300, 200)), (2.0, 1.0));
}

#[test]
fn preserves_timing_fields_and_drops_empty_paths() {
    let snap = snapshot(json!({
        "paths": [
            {"points": [], "name": "empty"},
            {"points": [{"x": 1, "y": 1}, {"x": 2, "y": 2}], "startTime": 0.3, "endTime": 0.1,
             "isSinglePoint": false, "interpolation": "ease-in"}
        ]
    }));
    let scaled = snap.to_frame_space(FrameSize::new(512, 512));
    assert_eq!(scaled.len(), 1);
    assert_eq!(scaled[0].start_time, 0.3);
    assert_eq!(scaled[0].end_time, 0.1);
    assert_eq!(scaled[0].interpolation, Interpolation::EaseIn);
    assert!(scaled[0].is_motion_path());
}

#[test]
fn motion_path_classification() {
    let base = ScenePath {
        name: "p".to_owned(),
        points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
        is_single_point: false,
        start_time: 0.0,
        end_time: 1.0,
        interpolation: Interpolation::Linear,
        visibility_mode: VisibilityMode::Pop,
    };
    assert!(base.is_motion_path());

    let flagged = ScenePath {
        is_single_point: true,
        ..base.clone()
    };
    assert!(!flagged.is_motion_path());

    let single = ScenePath {
        points: vec![Point::new(3.0, 4.0)],
        ..base
    };
    assert!(!single.is_motion_path());
}
