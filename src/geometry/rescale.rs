use crate::foundation::core::Point;
use crate::geometry::arc_length::arc_length;
use crate::scene::model::ScenePath;

const LENGTH_EPSILON: f64 = 1e-6;

/// Resolve the arc length a path should be stretched to.
pub fn target_length(original: f64, override_length: Option<f64>, multiplier: f64) -> f64 {
    let base = match override_length {
        Some(len) if len > 0.0 => len,
        _ => original,
    };
    base * multiplier
}

/// Scale every inter-point displacement by `target / original`, anchored at the first point.
///
/// Returns `None` when the path is left untouched: fewer than two points, zero length, or a
/// target already within `1e-6` of the current length.
pub fn rescale_to_length(points: &[Point], target: f64) -> Option<Vec<Point>> {
    if points.len() < 2 {
        return None;
    }
    let original = arc_length(points);
    if original <= 0.0 || (target - original).abs() < LENGTH_EPSILON {
        return None;
    }

    let factor = target / original;
    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for pair in points.windows(2) {
        let prev = out[out.len() - 1];
        let dx = pair[1].x - pair[0].x;
        let dy = pair[1].y - pair[0].y;
        out.push(Point::new(prev.x + dx * factor, prev.y + dy * factor));
    }
    Some(out)
}

/// Apply the configured length override and multiplier to every motion path.
///
/// Anchors (single points or paths flagged `is_single_point`) are never rescaled.
pub fn apply_length_overrides(
    paths: &mut [ScenePath],
    override_length: Option<f64>,
    multiplier: f64,
) {
    for path in paths.iter_mut().filter(|p| p.is_motion_path()) {
        let original = arc_length(&path.points);
        let target = target_length(original, override_length, multiplier);
        if let Some(points) = rescale_to_length(&path.points, target) {
            tracing::info!(
                path = %path.name,
                from_px = original,
                to_px = target,
                factor = target / original,
                "scaling path length"
            );
            path.points = points;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rescale.rs"]
mod tests;
