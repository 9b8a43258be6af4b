use crate::foundation::core::{FrameIndex, Point};
use crate::geometry::arc_length::interpolate_path;
use crate::scene::model::{ScenePath, VisibilityMode};
use crate::scene::params::AnimationConfig;

/// Closed interval `[start, end]` on the normalized global clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineWindow {
    pub start: f64,
    pub end: f64,
}

impl TimelineWindow {
    /// Return `true` when `t` lies inside the window, bounds included.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Map a frame index onto the global clock: frame 0 is 0.0 and the last frame is 1.0.
pub fn global_time(frame: FrameIndex, frame_count: u32) -> f64 {
    f64::from(frame.0) / f64::from(frame_count.saturating_sub(1).max(1))
}

/// Resolve the global timeline override from percentages.
///
/// Inactive (`None`) at the defaults 0 % / 100 %. Otherwise both bounds are clamped into
/// `[0, 1]`, swapped when inverted, and an empty window is widened to `0.01`.
pub fn global_override(start_percent: f64, end_percent: f64) -> Option<TimelineWindow> {
    if start_percent == 0.0 && end_percent == 100.0 {
        return None;
    }
    let mut start = (start_percent / 100.0).clamp(0.0, 1.0);
    let mut end = (end_percent / 100.0).clamp(0.0, 1.0);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    if start == end {
        end = (start + 0.01).min(1.0);
    }
    Some(TimelineWindow { start, end })
}

/// Where a path is in its timeline at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathPhase {
    /// Not drawn this frame (`pop` outside its window).
    Hidden,
    /// Moving inside its window; carries the eased local progress.
    Animating { eased_t: f64 },
    /// `static` before its window: start pose.
    HeldStart,
    /// `static` after its window: end pose with full rotation.
    HeldEnd,
    /// Any other non-animating state: start pose, no rotation.
    Fallback,
}

/// Position and rotation (degrees) of a path's shape at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub rotation_deg: f64,
}

/// Maps the global clock to per-path phases and poses.
#[derive(Clone, Copy, Debug)]
pub struct TimelineScheduler {
    override_window: Option<TimelineWindow>,
    rotation_speed: f64,
}

impl TimelineScheduler {
    pub fn new(override_window: Option<TimelineWindow>, rotation_speed: f64) -> Self {
        Self {
            override_window,
            rotation_speed,
        }
    }

    /// Build the scheduler for a resolved configuration, logging an active override.
    pub fn from_config(config: &AnimationConfig) -> Self {
        let window = global_override(config.start_time_percent, config.end_time_percent);
        if let Some(w) = window {
            tracing::info!(
                start_percent = w.start * 100.0,
                end_percent = w.end * 100.0,
                "global timeline override replaces per-path timing"
            );
        }
        Self::new(window, config.rotation_speed)
    }

    /// Active global override, if any.
    pub fn override_window(&self) -> Option<TimelineWindow> {
        self.override_window
    }

    /// Window used for `path`: the global override when active, else its own timing.
    pub fn window_for(&self, path: &ScenePath) -> TimelineWindow {
        self.override_window.unwrap_or(TimelineWindow {
            start: path.start_time,
            end: path.end_time,
        })
    }

    /// Classify `path` at global time `t`.
    ///
    /// An inverted per-path window (`end < start`) never animates and lands in the fallback
    /// phase unless the path is `pop` (hidden) or `static` (held).
    pub fn phase(&self, path: &ScenePath, t: f64) -> PathPhase {
        let w = self.window_for(path);
        let in_window = w.contains(t);

        if path.visibility_mode == VisibilityMode::Pop && !in_window {
            return PathPhase::Hidden;
        }
        if in_window && w.end > w.start {
            let local_t = (t - w.start) / (w.end - w.start);
            return PathPhase::Animating {
                eased_t: path.interpolation.apply(local_t),
            };
        }
        if path.visibility_mode == VisibilityMode::Static {
            return if t < w.start {
                PathPhase::HeldStart
            } else {
                PathPhase::HeldEnd
            };
        }
        PathPhase::Fallback
    }

    /// Pose of `path` at global time `t`, or `None` when it is hidden.
    ///
    /// Anchors keep their first point for every frame; only visibility and rotation follow the
    /// phase.
    pub fn pose_at(&self, path: &ScenePath, t: f64) -> Option<Pose> {
        let (progress, rotation_deg) = match self.phase(path, t) {
            PathPhase::Hidden => return None,
            PathPhase::Animating { eased_t } => (eased_t, self.rotation_speed * eased_t * 360.0),
            PathPhase::HeldEnd => (1.0, self.rotation_speed * 360.0),
            PathPhase::HeldStart | PathPhase::Fallback => (0.0, 0.0),
        };
        let position = if path.is_motion_path() {
            interpolate_path(&path.points, progress)
        } else {
            path.points.first().copied().unwrap_or(Point::ZERO)
        };
        Some(Pose {
            position,
            rotation_deg,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/timeline.rs"]
mod tests;
