use crate::effects::blur::gaussian_blur_rgba8;
use crate::effects::trail::TrailAccumulator;
use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::eval::timeline::{TimelineScheduler, global_time};
use crate::export::tracks::{Track, export_tracks, tracks_to_json};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::MotionResult;
use crate::geometry::rescale::apply_length_overrides;
use crate::render::backend::{FrameRgb, Mask};
use crate::render::cpu::CpuRasterizer;
use crate::scene::model::{PathSnapshot, ScenePath};
use crate::scene::params::AnimationConfig;

/// Everything one invocation produces.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutput {
    /// Color frames in frame order, channels in `[0, 1]`.
    pub frames: Vec<FrameRgb>,
    /// Red-channel masks, one per frame.
    pub masks: Vec<Mask>,
    /// One 121-point coordinate track per path, in input order.
    pub tracks: Vec<Track>,
}

impl RenderOutput {
    /// Serialize the coordinate tracks.
    pub fn tracks_json(&self) -> MotionResult<String> {
        tracks_to_json(&self.tracks)
    }
}

/// Frame loop statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Shape draws across all frames; hidden paths are not counted.
    pub shapes_drawn: u64,
}

/// A prepared animation: resolved configuration plus frame-space, length-adjusted paths.
///
/// Preparation happens once; frames and tracks are then produced from the same path set.
#[derive(Clone, Debug)]
pub struct AnimationSession {
    config: AnimationConfig,
    paths: Vec<ScenePath>,
    scheduler: TimelineScheduler,
}

impl AnimationSession {
    /// Map `snapshot` into frame space and apply the configured length overrides.
    pub fn new(config: AnimationConfig, snapshot: &PathSnapshot) -> Self {
        let mut paths = snapshot.to_frame_space(config.frame);
        apply_length_overrides(
            &mut paths,
            config.override_path_length,
            config.path_length_multiplier,
        );
        let scheduler = TimelineScheduler::from_config(&config);
        tracing::debug!(paths = paths.len(), "animation session prepared");
        Self {
            config,
            paths,
            scheduler,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Frame-space paths after length adjustment.
    pub fn paths(&self) -> &[ScenePath] {
        &self.paths
    }

    pub fn scheduler(&self) -> &TimelineScheduler {
        &self.scheduler
    }

    /// Render every frame into `sink`, scheduled by the same scheduler that windows the tracks.
    pub fn render_into(&self, sink: &mut dyn FrameSink) -> MotionResult<RenderStats> {
        run_frame_loop(&self.config, &self.paths, &self.scheduler, sink)
    }

    /// Export the coordinate tracks.
    pub fn tracks(&self) -> Vec<Track> {
        export_tracks(&self.paths, self.scheduler.override_window())
    }
}

/// Render the whole animation: frames, masks and coordinate tracks.
#[tracing::instrument(skip_all, fields(paths = snapshot.paths.len(), frames = config.frame_count))]
pub fn render(config: &AnimationConfig, snapshot: &PathSnapshot) -> MotionResult<RenderOutput> {
    let session = AnimationSession::new(config.clone(), snapshot);

    let mut sink = InMemorySink::new();
    let stats = session.render_into(&mut sink)?;
    let tracks = session.tracks();
    tracing::info!(
        frames = stats.frames,
        shapes = stats.shapes_drawn,
        tracks = tracks.len(),
        "render complete"
    );

    let (frames, masks) = sink.into_parts();
    Ok(RenderOutput {
        frames,
        masks,
        tracks,
    })
}

/// Run the frame loop over frame-space `paths` and stream the result into `sink`.
///
/// Frames are produced strictly in order; each one depends on the previous through the trail.
pub fn render_frames_into(
    config: &AnimationConfig,
    paths: &[ScenePath],
    sink: &mut dyn FrameSink,
) -> MotionResult<RenderStats> {
    run_frame_loop(config, paths, &TimelineScheduler::from_config(config), sink)
}

fn run_frame_loop(
    config: &AnimationConfig,
    paths: &[ScenePath],
    scheduler: &TimelineScheduler,
    sink: &mut dyn FrameSink,
) -> MotionResult<RenderStats> {
    let style = config.shape_style();
    let size = config.frame;
    let mut raster = CpuRasterizer::new(size)?;
    let mut trail = TrailAccumulator::new(config.trail_length);
    let mut stats = RenderStats::default();

    sink.begin(SinkConfig {
        frame: size,
        frame_count: config.frame_count,
    })?;

    for i in 0..config.frame_count {
        let idx = FrameIndex(i);
        let t = global_time(idx, config.frame_count);

        raster.begin_frame(config.bg_color);
        for path in paths {
            if let Some(pose) = scheduler.pose_at(path, t) {
                raster.draw_shape(&style, pose);
                stats.shapes_drawn += 1;
            }
        }
        let rgba = raster.finish_frame();

        let frame = if config.blur_radius > 0.0 {
            let blurred = gaussian_blur_rgba8(rgba, size, config.blur_radius)?;
            FrameRgb::from_rgba8(size, &blurred)?
        } else {
            FrameRgb::from_rgba8(size, rgba)?
        };
        let frame = trail.blend(frame);
        let mask = frame.red_mask();

        sink.push_frame(idx, &frame, &mask)?;
        stats.frames += 1;
        tracing::debug!(frame = i, t, "frame rendered");
    }

    sink.end()?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/session/pipeline.rs"]
mod tests;
