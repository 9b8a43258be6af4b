use crate::foundation::core::{BezPath, Point, Rgb8};
use kurbo::Shape;

/// Inner radius of the star relative to its outer radius.
const STAR_INNER_RATIO: f64 = 0.4;

/// Primitive drawn at each path's position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
    Triangle,
    Hexagon,
    Star,
}

impl ShapeKind {
    /// Parse a shape name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "triangle" => Some(Self::Triangle),
            "hexagon" => Some(Self::Hexagon),
            "star" => Some(Self::Star),
            _ => None,
        }
    }

    /// Whether rotation changes the drawn outline.
    pub fn is_rotatable(self) -> bool {
        matches!(self, Self::Triangle | Self::Hexagon | Self::Star)
    }
}

/// Fill and border settings shared by every shape in a render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub kind: ShapeKind,
    /// Bounding size in pixels; the half-size is the radius / half-extent.
    pub size: f64,
    pub fill: Rgb8,
    /// Outline width in pixels; 0 draws the fill only.
    pub border_width: u32,
    pub border_color: Rgb8,
}

/// Vertices of the polygonal shapes, centered at `center`.
///
/// Circles and squares have no rotated vertex form and return `None`.
pub fn polygon_vertices(
    kind: ShapeKind,
    center: Point,
    size: f64,
    rotation_deg: f64,
) -> Option<Vec<Point>> {
    let half = size / 2.0;
    match kind {
        ShapeKind::Circle | ShapeKind::Square => None,
        ShapeKind::Triangle => {
            let pts = [
                Point::new(center.x, center.y - half),
                Point::new(center.x - half, center.y + half),
                Point::new(center.x + half, center.y + half),
            ];
            if rotation_deg == 0.0 {
                return Some(pts.to_vec());
            }
            Some(rotate_about(&pts, center, rotation_deg))
        }
        ShapeKind::Hexagon => Some(
            (0..6)
                .map(|i| {
                    let angle = (60.0 * f64::from(i) + rotation_deg).to_radians();
                    Point::new(
                        center.x + half * angle.cos(),
                        center.y + half * angle.sin(),
                    )
                })
                .collect(),
        ),
        ShapeKind::Star => Some(
            (0..10)
                .map(|i| {
                    let angle = (36.0 * f64::from(i) + rotation_deg).to_radians()
                        - std::f64::consts::FRAC_PI_2;
                    let r = if i % 2 == 0 {
                        half
                    } else {
                        half * STAR_INNER_RATIO
                    };
                    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
                })
                .collect(),
        ),
    }
}

fn rotate_about(points: &[Point], center: Point, angle_deg: f64) -> Vec<Point> {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    points
        .iter()
        .map(|p| {
            let x = p.x - center.x;
            let y = p.y - center.y;
            Point::new(
                x * cos_a - y * sin_a + center.x,
                x * sin_a + y * cos_a + center.y,
            )
        })
        .collect()
}

/// Closed outline of `kind` centered at `center`.
pub fn shape_outline(kind: ShapeKind, center: Point, size: f64, rotation_deg: f64) -> BezPath {
    let half = size / 2.0;
    match kind {
        ShapeKind::Circle => kurbo::Circle::new(center, half).to_path(0.1),
        ShapeKind::Square => {
            kurbo::Rect::new(center.x - half, center.y - half, center.x + half, center.y + half)
                .to_path(0.1)
        }
        _ => {
            let mut path = BezPath::new();
            let verts = polygon_vertices(kind, center, size, rotation_deg).unwrap_or_default();
            let mut iter = verts.into_iter();
            if let Some(first) = iter.next() {
                path.move_to(first);
                for p in iter {
                    path.line_to(p);
                }
                path.close_path();
            }
            path
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
