use crate::animation::ease::Interpolation;
use crate::foundation::core::{FrameSize, Point};

/// Policy for a path's appearance outside its timeline window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    /// Hidden outside the window.
    #[default]
    Pop,
    /// Held at the start pose before the window and at the end pose after it.
    Static,
    /// Any other mode: drawn at the start pose whenever it is not animating.
    #[serde(other)]
    Fallback,
}

/// Authoring canvas dimensions; missing axes default to the frame size.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Canvas width in editor units.
    #[serde(default)]
    pub width: Option<f64>,
    /// Canvas height in editor units.
    #[serde(default)]
    pub height: Option<f64>,
}

/// One trajectory exactly as the path editor serialized it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDef {
    /// Polyline vertices in canvas space, in drawing order.
    #[serde(default)]
    pub points: Vec<Point>,
    /// Marks a static anchor rather than a motion path.
    #[serde(default)]
    pub is_single_point: bool,
    /// Window start on the global clock.
    #[serde(default)]
    pub start_time: f64,
    /// Window end on the global clock.
    #[serde(default = "default_end_time")]
    pub end_time: f64,
    /// Easing applied to local progress.
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Behavior outside the window.
    #[serde(default)]
    pub visibility_mode: VisibilityMode,
    /// Display label, used for logging only.
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_end_time() -> f64 {
    1.0
}

fn default_name() -> String {
    "Untitled".to_owned()
}

/// Serialized snapshot of the editor state consumed by the pipeline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathSnapshot {
    /// Paths in editor order; later paths draw over earlier ones.
    #[serde(default)]
    pub paths: Vec<PathDef>,
    /// Space the point coordinates were authored in.
    #[serde(default)]
    pub canvas_size: Option<CanvasSize>,
}

/// Snapshot envelope; paths stay untyped so each one is decoded on its own.
#[derive(serde::Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    paths: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    canvas_size: Option<CanvasSize>,
}

impl PathDef {
    /// Decode one path object. `null` fields count as absent and take their defaults.
    pub fn from_value(mut value: serde_json::Value) -> serde_json::Result<Self> {
        if let serde_json::Value::Object(fields) = &mut value {
            fields.retain(|_, v| !v.is_null());
        }
        serde_json::from_value(value)
    }
}

impl PathSnapshot {
    /// Decode a snapshot leniently.
    ///
    /// A malformed envelope yields the empty snapshot. A path that still fails to decode after
    /// `null` fields are defaulted is skipped on its own; the other paths are kept.
    pub fn parse(json: &str) -> Self {
        let raw = match serde_json::from_str::<RawSnapshot>(json) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(%err, "invalid paths payload, using empty path set");
                return Self::default();
            }
        };

        let paths = raw
            .paths
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match PathDef::from_value(value) {
                Ok(def) => Some(def),
                Err(err) => {
                    tracing::warn!(index, %err, "invalid path definition, skipping");
                    None
                }
            })
            .collect();

        Self {
            paths,
            canvas_size: raw.canvas_size,
        }
    }

    /// Scale factors from canvas space into `frame` space.
    ///
    /// Axes are scaled independently; a missing or non-positive canvas axis scales by 1.
    pub fn scale_to(&self, frame: FrameSize) -> (f64, f64) {
        let canvas = self.canvas_size.unwrap_or_default();
        let axis = |canvas_len: Option<f64>, frame_len: u32| -> f64 {
            let frame_len = f64::from(frame_len);
            let canvas_len = canvas_len.unwrap_or(frame_len);
            if canvas_len > 0.0 {
                frame_len / canvas_len
            } else {
                1.0
            }
        };
        (axis(canvas.width, frame.width), axis(canvas.height, frame.height))
    }

    /// Produce the frame-space path set.
    ///
    /// Timing, easing and visibility fields are carried over verbatim. Paths without points
    /// cannot be drawn or exported and are dropped.
    pub fn to_frame_space(&self, frame: FrameSize) -> Vec<ScenePath> {
        let (sx, sy) = self.scale_to(frame);
        tracing::debug!(scale_x = sx, scale_y = sy, "canvas to frame scale");

        self.paths
            .iter()
            .filter_map(|def| {
                if def.points.is_empty() {
                    tracing::warn!(path = %def.name, "path has no points, skipping");
                    return None;
                }
                Some(ScenePath {
                    name: def.name.clone(),
                    points: def
                        .points
                        .iter()
                        .map(|p| Point::new(p.x * sx, p.y * sy))
                        .collect(),
                    is_single_point: def.is_single_point,
                    start_time: def.start_time,
                    end_time: def.end_time,
                    interpolation: def.interpolation,
                    visibility_mode: def.visibility_mode,
                })
            })
            .collect()
    }
}

/// A trajectory in output-frame pixel space. `points` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePath {
    /// Display label.
    pub name: String,
    /// Frame-space vertices.
    pub points: Vec<Point>,
    /// Marks a static anchor.
    pub is_single_point: bool,
    /// Per-path window start.
    pub start_time: f64,
    /// Per-path window end.
    pub end_time: f64,
    /// Easing applied to local progress.
    pub interpolation: Interpolation,
    /// Behavior outside the window.
    pub visibility_mode: VisibilityMode,
}

impl ScenePath {
    /// `true` for multi-point trajectories that are not flagged as anchors.
    pub fn is_motion_path(&self) -> bool {
        self.points.len() > 1 && !self.is_single_point
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
