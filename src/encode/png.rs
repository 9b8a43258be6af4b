use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::backend::{FrameRgb, Mask};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Writes `frame_NNNN.png` (RGB8) and `mask_NNNN.png` (L8) into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    written: u32,
}

impl PngSequenceSink {
    /// Create a sink targeting `dir`; the directory is created in `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            written: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Frames written so far.
    pub fn written(&self) -> u32 {
        self.written
    }

    /// Path of the color frame with index `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:04}.png", idx.0))
    }

    /// Path of the mask with index `idx`.
    pub fn mask_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("mask_{:04}.png", idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        self.cfg = Some(cfg);
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb, mask: &Mask) -> MotionResult<()> {
        if self.cfg.is_none() {
            return Err(MotionError::validation(
                "png sink received a frame before begin",
            ));
        }

        let path = self.frame_path(idx);
        image::save_buffer_with_format(
            &path,
            &frame.to_rgb8(),
            frame.width,
            frame.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write frame png '{}'", path.display()))?;

        let path = self.mask_path(idx);
        image::save_buffer_with_format(
            &path,
            &mask.to_luma8(),
            mask.width,
            mask.height,
            image::ColorType::L8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write mask png '{}'", path.display()))?;

        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> MotionResult<()> {
        tracing::info!(
            dir = %self.dir.display(),
            frames = self.written,
            "png sequence written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
