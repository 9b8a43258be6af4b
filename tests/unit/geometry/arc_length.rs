use super::*;

fn l_path() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]
}

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn resample_returns_exactly_n_points() {
    let path = l_path();
    for n in [1, 2, 3, 7, 121, 500] {
        assert_eq!(resample(&path, n).len(), n);
    }
    assert!(resample(&path, 0).is_empty());
    assert!(resample(&[], 5).is_empty());
}

#[test]
fn single_point_and_zero_length_repeat_the_anchor() {
    let anchor = Point::new(3.0, 4.0);
    for n in [1, 2, 121] {
        assert!(resample(&[anchor], n).iter().all(|&p| p == anchor));
    }

    let coincident = vec![anchor, anchor, anchor];
    let out = resample(&coincident, 9);
    assert_eq!(out.len(), 9);
    assert!(out.iter().all(|&p| p == anchor));
}

#[test]
fn samples_are_evenly_spaced_by_arc_length() {
    let out = resample(&l_path(), 5);
    let expected = [
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(10.0, 10.0),
    ];
    for (a, b) in out.iter().zip(expected) {
        assert_close(*a, b);
    }
}

#[test]
fn resample_of_one_is_the_start() {
    assert_eq!(resample(&l_path(), 1), vec![Point::new(0.0, 0.0)]);
}

#[test]
fn arc_length_never_grows_and_converges() {
    let curve: Vec<Point> = (0..=64)
        .map(|i| {
            let a = i as f64 / 64.0 * std::f64::consts::PI;
            Point::new(100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect();
    let original = arc_length(&curve);

    let mut prev_err = f64::INFINITY;
    for n in [8, 32, 128, 1024] {
        let len = arc_length(&resample(&curve, n));
        assert!(len <= original + 1e-9);
        let err = original - len;
        assert!(err <= prev_err + 1e-9);
        prev_err = err;
    }
    assert!(prev_err < 1e-2);
}

#[test]
fn resampling_evenly_spaced_input_is_idempotent() {
    let line = vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(12.0, 16.0),
        Point::new(30.0, 40.0),
    ];
    let once = resample(&line, 121);
    let twice = resample(&once, 121);
    for (a, b) in once.iter().zip(twice.iter()) {
        assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
    }
}

#[test]
fn resampling_a_bent_path_never_lengthens_it() {
    let curve = vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 1.0),
        Point::new(7.0, 8.0),
        Point::new(20.0, 2.0),
    ];
    let once = resample(&curve, 121);
    let twice = resample(&once, 121);
    assert!(arc_length(&once) <= arc_length(&curve) + 1e-9);
    assert!(arc_length(&twice) <= arc_length(&once) + 1e-9);
    assert_eq!(twice[0], curve[0]);
    assert_close(twice[120], curve[3]);
}

#[test]
fn interpolate_matches_resample_at_shared_parameters() {
    let path = l_path();
    let samples = resample(&path, 11);
    for (i, s) in samples.iter().enumerate() {
        let t = i as f64 / 10.0;
        assert_close(interpolate_path(&path, t), *s);
    }
}

#[test]
fn interpolate_handles_degenerate_inputs() {
    assert_eq!(interpolate_path(&[], 0.5), Point::ZERO);
    let p = Point::new(1.0, 2.0);
    assert_eq!(interpolate_path(&[p], 0.7), p);
    assert_eq!(interpolate_path(&[p, p], 0.7), p);
}

#[test]
fn midpoint_lands_on_segment_boundary() {
    assert_eq!(interpolate_path(&l_path(), 0.5), Point::new(10.0, 0.0));
    assert_eq!(interpolate_path(&l_path(), 1.0), Point::new(10.0, 10.0));
}

#[test]
fn zero_length_segments_are_skipped() {
    let path = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
    ];
    assert_eq!(interpolate_path(&path, 0.0), Point::new(0.0, 0.0));
    assert_eq!(interpolate_path(&path, 0.5), Point::new(2.0, 0.0));
    assert_eq!(arc_length(&path), 4.0);
}
