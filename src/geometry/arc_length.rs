use crate::foundation::core::Point;

/// Cumulative arc-length table over a polyline.
///
/// `cumulative[i]` is the distance travelled from `points[0]` to `points[i]`, so the table is
/// monotonically non-decreasing and its last entry is the total length.
#[derive(Clone, Debug)]
pub struct ArcLengthTable<'a> {
    points: &'a [Point],
    cumulative: Vec<f64>,
}

impl<'a> ArcLengthTable<'a> {
    /// Build the table for `points`.
    pub fn new(points: &'a [Point]) -> Self {
        let mut cumulative = Vec::with_capacity(points.len().max(1));
        cumulative.push(0.0);
        for pair in points.windows(2) {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            let last = cumulative[cumulative.len() - 1];
            cumulative.push(last + (dx * dx + dy * dy).sqrt());
        }
        Self { points, cumulative }
    }

    /// Total length of the polyline; 0 for fewer than two points.
    pub fn total(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Position at `distance` along the polyline.
    ///
    /// Locates the first segment whose end lies at or beyond `distance` and interpolates
    /// linearly inside it. Distances past the end yield the last point.
    pub fn point_at_distance(&self, distance: f64) -> Point {
        let Some(&first) = self.points.first() else {
            return Point::ZERO;
        };
        if self.points.len() == 1 {
            return first;
        }

        let seg = self.cumulative[1..].partition_point(|&c| c < distance);
        if seg >= self.points.len() - 1 {
            return self.points[self.points.len() - 1];
        }

        let (a, b) = (self.points[seg], self.points[seg + 1]);
        let seg_len = self.cumulative[seg + 1] - self.cumulative[seg];
        let t = if seg_len > 0.0 {
            (distance - self.cumulative[seg]) / seg_len
        } else {
            0.0
        };
        Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    }

    /// Evaluate the polyline at each target distance.
    ///
    /// Degenerate inputs (one point, or zero total length) yield the first point for every
    /// target. This is the single walk shared by rendering and track export.
    pub fn sample_at_distances(&self, targets: impl IntoIterator<Item = f64>) -> Vec<Point> {
        let Some(&first) = self.points.first() else {
            return Vec::new();
        };
        let degenerate = self.points.len() == 1 || self.total() == 0.0;
        targets
            .into_iter()
            .map(|d| {
                if degenerate {
                    first
                } else {
                    self.point_at_distance(d)
                }
            })
            .collect()
    }
}

/// Total Euclidean length of a polyline.
pub fn arc_length(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    ArcLengthTable::new(points).total()
}

/// Resample `points` to exactly `n` points evenly spaced by arc length.
///
/// Sample `i` sits at distance `i / (n - 1) * total`; with `n == 1` the only sample is the
/// start. Empty input yields an empty result.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let table = ArcLengthTable::new(points);
    let total = table.total();
    let targets = (0..n).map(move |i| {
        if n == 1 {
            0.0
        } else {
            (i as f64 / (n - 1) as f64) * total
        }
    });
    table.sample_at_distances(targets)
}

/// Position at normalized arc-length parameter `t` in `[0, 1]`.
pub fn interpolate_path(points: &[Point], t: f64) -> Point {
    let table = ArcLengthTable::new(points);
    let total = table.total();
    table
        .sample_at_distances(std::iter::once(t * total))
        .pop()
        .unwrap_or(Point::ZERO)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc_length.rs"]
mod tests;
