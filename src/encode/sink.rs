use crate::foundation::core::{FrameIndex, FrameSize};
use crate::foundation::error::MotionResult;
use crate::render::backend::{FrameRgb, Mask};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output dimensions in pixels.
    pub frame: FrameSize,
    /// Number of frames that will be pushed.
    pub frame_count: u32,
}

/// Sink contract for consuming rendered frames and their masks.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, starting
/// at 0.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()>;
    /// Push one frame and its mask.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb, mask: &Mask) -> MotionResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> MotionResult<()>;
}

/// In-memory sink for tests and library callers that want the whole sequence.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    pub(crate) frames: Vec<FrameRgb>,
    pub(crate) masks: Vec<Mask>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames in timeline order.
    pub fn frames(&self) -> &[FrameRgb] {
        &self.frames
    }

    /// Masks in timeline order.
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take ownership of the captured frames and masks.
    pub fn into_parts(self) -> (Vec<FrameRgb>, Vec<Mask>) {
        (self.frames, self.masks)
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.masks.clear();
        self.frames.reserve(cfg.frame_count as usize);
        self.masks.reserve(cfg.frame_count as usize);
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameRgb, mask: &Mask) -> MotionResult<()> {
        self.frames.push(frame.clone());
        self.masks.push(mask.clone());
        Ok(())
    }

    fn end(&mut self) -> MotionResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
