//! pathmotion animates simple shapes along hand-drawn paths.
//!
//! A path snapshot (polylines with per-path timing, easing and visibility) plus a set of
//! animation options goes in; out come:
//!
//! - a sequence of RGB frames and matching red-channel masks
//! - one 121-point, arc-length-uniform integer coordinate track per path
//!
//! The entry point is [`render`]. [`AnimationSession`] and [`render_frames_into`] stream frames
//! into any [`FrameSink`] instead of collecting them.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod assets;
pub(crate) mod effects;
pub(crate) mod encode;
pub(crate) mod eval;
pub(crate) mod export;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{BezPath, FrameIndex, FrameSize, Point, Rgb8, Vec2};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::ease::Interpolation;
pub use crate::assets::color::{parse_color, resolve_color};
pub use crate::effects::blur::gaussian_blur_rgba8;
pub use crate::effects::trail::TrailAccumulator;
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::eval::timeline::{
    PathPhase, Pose, TimelineScheduler, TimelineWindow, global_override, global_time,
};
pub use crate::export::tracks::{
    TRACK_SAMPLES, Track, TrackPoint, export_tracks, tracks_to_json,
};
pub use crate::geometry::arc_length::{ArcLengthTable, arc_length, interpolate_path, resample};
pub use crate::geometry::rescale::{apply_length_overrides, rescale_to_length, target_length};
pub use crate::render::backend::{FrameRgb, Mask};
pub use crate::render::cpu::CpuRasterizer;
pub use crate::render::shapes::{ShapeKind, ShapeStyle, polygon_vertices, shape_outline};
pub use crate::scene::model::{CanvasSize, PathDef, PathSnapshot, ScenePath, VisibilityMode};
pub use crate::scene::params::{AnimationConfig, AnimationParams};
pub use crate::session::pipeline::{
    AnimationSession, RenderOutput, RenderStats, render, render_frames_into,
};
