use crate::eval::timeline::TimelineWindow;
use crate::foundation::core::Point;
use crate::foundation::error::MotionResult;
use crate::geometry::arc_length::resample;
use crate::scene::model::ScenePath;
use rayon::prelude::*;

/// Samples per exported track.
pub const TRACK_SAMPLES: usize = 121;

/// One integer coordinate of an exported track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TrackPoint {
    pub x: i64,
    pub y: i64,
}

impl TrackPoint {
    /// Round a frame-space point half-to-even on both axes.
    pub fn from_point(p: Point) -> Self {
        Self {
            x: p.x.round_ties_even() as i64,
            y: p.y.round_ties_even() as i64,
        }
    }
}

/// A fixed-length arc-length-uniform track.
pub type Track = Vec<TrackPoint>;

/// Export one track per path, in input order.
///
/// When `override_window` is set, motion paths are cut down to the samples inside the window
/// and stretched back to [`TRACK_SAMPLES`] points. Anchors repeat their first point.
pub fn export_tracks(paths: &[ScenePath], override_window: Option<TimelineWindow>) -> Vec<Track> {
    let tracks: Vec<Track> = paths
        .par_iter()
        .map(|path| export_track(path, override_window))
        .collect();
    tracing::info!(
        tracks = tracks.len(),
        samples = TRACK_SAMPLES,
        "generated coordinate tracks"
    );
    tracks
}

fn export_track(path: &ScenePath, override_window: Option<TimelineWindow>) -> Track {
    if !path.is_motion_path() {
        let anchor = TrackPoint::from_point(path.points.first().copied().unwrap_or(Point::ZERO));
        return vec![anchor; TRACK_SAMPLES];
    }

    let mut samples = resample(&path.points, TRACK_SAMPLES);
    if let Some(window) = override_window {
        let windowed = window_slice(&samples, window);
        if windowed.len() >= 2 {
            samples = resample(windowed, TRACK_SAMPLES);
        }
    }

    samples.into_iter().map(TrackPoint::from_point).collect()
}

/// Inclusive sample slice covering `window`, at least two indices wide before clipping.
fn window_slice(samples: &[Point], window: TimelineWindow) -> &[Point] {
    let last = (TRACK_SAMPLES - 1) as f64;
    let start_idx = (window.start * last).round_ties_even().max(0.0) as usize;
    let mut end_idx = (window.end * last).round_ties_even().max(0.0) as usize;
    if end_idx <= start_idx {
        end_idx = start_idx + 1;
    }

    let hi = (end_idx + 1).min(samples.len());
    let lo = start_idx.min(hi);
    &samples[lo..hi]
}

/// Serialize tracks as `[[{"x":..,"y":..}, ...], ...]`.
pub fn tracks_to_json(tracks: &[Track]) -> MotionResult<String> {
    Ok(serde_json::to_string(tracks)?)
}

#[cfg(test)]
#[path = "../../tests/unit/export/tracks.rs"]
mod tests;
