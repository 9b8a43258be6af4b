use crate::assets::color::resolve_color;
use crate::foundation::core::{FrameSize, Rgb8};
use crate::render::shapes::{ShapeKind, ShapeStyle};

/// Raw animation options as supplied by the host, before validation.
///
/// Every field has the host's documented default, so a partial (or empty) JSON object is a
/// valid value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationParams {
    pub frame_width: i64,
    pub frame_height: i64,
    pub frame_count: i64,
    pub shape: String,
    pub shape_size: i64,
    pub shape_color: String,
    pub bg_color: String,
    pub blur_radius: f64,
    pub trail_length: f64,
    pub rotation_speed: f64,
    pub border_width: i64,
    pub border_color: String,
    pub start_time_percent: f64,
    pub end_time_percent: f64,
    pub override_path_length: i64,
    pub path_length_multiplier: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            frame_width: 512,
            frame_height: 512,
            frame_count: 30,
            shape: "circle".to_owned(),
            shape_size: 20,
            shape_color: "white".to_owned(),
            bg_color: "black".to_owned(),
            blur_radius: 0.0,
            trail_length: 0.0,
            rotation_speed: 0.0,
            border_width: 0,
            border_color: "white".to_owned(),
            start_time_percent: 0.0,
            end_time_percent: 100.0,
            override_path_length: -1,
            path_length_multiplier: 1.0,
        }
    }
}

impl AnimationParams {
    /// Decode options from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> crate::MotionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated animation configuration, resolved once at pipeline entry.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub frame: FrameSize,
    pub frame_count: u32,
    pub shape: ShapeKind,
    pub shape_size: f64,
    pub shape_color: Rgb8,
    pub bg_color: Rgb8,
    pub blur_radius: f64,
    pub trail_length: f64,
    pub rotation_speed: f64,
    pub border_width: u32,
    pub border_color: Rgb8,
    pub start_time_percent: f64,
    pub end_time_percent: f64,
    /// Target arc length in pixels; `None` keeps each path's own length.
    pub override_path_length: Option<f64>,
    pub path_length_multiplier: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::resolve(&AnimationParams::default())
    }
}

impl AnimationConfig {
    /// Resolve raw options: parse colors and shape, clamp numbers into their ranges.
    ///
    /// Never fails; every substitution or clamp is logged.
    pub fn resolve(params: &AnimationParams) -> Self {
        let shape = ShapeKind::parse(&params.shape).unwrap_or_else(|| {
            tracing::warn!(shape = %params.shape, "unknown shape, using circle");
            ShapeKind::Circle
        });

        let override_path_length = if params.override_path_length > 0 {
            Some(clamp_i("override_path_length", params.override_path_length, 1, 8192) as f64)
        } else {
            None
        };

        Self {
            frame: FrameSize::new(
                clamp_i("frame_width", params.frame_width, 64, 4096) as u32,
                clamp_i("frame_height", params.frame_height, 64, 4096) as u32,
            ),
            frame_count: clamp_i("frame_count", params.frame_count, 1, 500) as u32,
            shape,
            shape_size: clamp_i("shape_size", params.shape_size, 2, 500) as f64,
            shape_color: resolve_color(&params.shape_color, Rgb8::WHITE),
            bg_color: resolve_color(&params.bg_color, Rgb8::BLACK),
            blur_radius: clamp_f("blur_radius", params.blur_radius, 0.0, 50.0),
            trail_length: clamp_f("trail_length", params.trail_length, 0.0, 1.0),
            rotation_speed: clamp_f("rotation_speed", params.rotation_speed, -360.0, 360.0),
            border_width: clamp_i("border_width", params.border_width, 0, 20) as u32,
            border_color: resolve_color(&params.border_color, Rgb8::WHITE),
            start_time_percent: clamp_f("start_time_percent", params.start_time_percent, 0.0, 100.0),
            end_time_percent: clamp_f("end_time_percent", params.end_time_percent, 0.0, 100.0),
            override_path_length,
            path_length_multiplier: clamp_f(
                "path_length_multiplier",
                params.path_length_multiplier,
                0.01,
                100.0,
            ),
        }
    }

    /// Fill and border settings applied to every path's shape.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            kind: self.shape,
            size: self.shape_size,
            fill: self.shape_color,
            border_width: self.border_width,
            border_color: self.border_color,
        }
    }
}

fn clamp_i(field: &'static str, v: i64, lo: i64, hi: i64) -> i64 {
    let out = v.clamp(lo, hi);
    if out != v {
        tracing::warn!(field, value = v, clamped = out, "option out of range");
    }
    out
}

fn clamp_f(field: &'static str, v: f64, lo: f64, hi: f64) -> f64 {
    if !v.is_finite() {
        tracing::warn!(field, value = v, clamped = lo, "option is not finite");
        return lo;
    }
    let out = v.clamp(lo, hi);
    if out != v {
        tracing::warn!(field, value = v, clamped = out, "option out of range");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/params.rs"]
mod tests;
