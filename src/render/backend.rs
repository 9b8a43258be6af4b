use crate::foundation::core::FrameSize;
use crate::foundation::error::{MotionError, MotionResult};

/// One rendered RGB frame; channels are interleaved `f32` values.
///
/// Frames leaving the pipeline are clamped to `[0, 1]`. Inside the trail accumulator values may
/// temporarily exceed 1 before normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRgb {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

/// Single-channel mask derived from a frame's red channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl FrameRgb {
    /// Convert opaque RGBA8 pixels (alpha ignored) into a normalized RGB frame.
    pub fn from_rgba8(size: FrameSize, rgba: &[u8]) -> MotionResult<Self> {
        let expected = size
            .pixel_count()
            .checked_mul(4)
            .ok_or_else(|| MotionError::render("frame buffer size overflow"))?;
        if rgba.len() != expected {
            return Err(MotionError::render(format!(
                "rgba buffer has {} bytes, expected {expected}",
                rgba.len()
            )));
        }

        let mut data = Vec::with_capacity(size.pixel_count() * 3);
        for px in rgba.chunks_exact(4) {
            data.extend(px[..3].iter().map(|&c| f32::from(c) / 255.0));
        }
        Ok(Self {
            width: size.width,
            height: size.height,
            data,
        })
    }

    /// Largest channel value in the frame, or 0 for an empty frame.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0f32, f32::max)
    }

    /// Clamp every channel into `[0, 1]`.
    pub fn clamp_unit(&mut self) {
        for v in &mut self.data {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Extract the red channel as a mask.
    pub fn red_mask(&self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            data: self.data.chunks_exact(3).map(|px| px[0]).collect(),
        }
    }

    /// Quantize to 8-bit RGB for encoding.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| unit_to_u8(v)).collect()
    }
}

impl Mask {
    /// Quantize to 8-bit grayscale for encoding.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| unit_to_u8(v)).collect()
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
