use crate::render::backend::FrameRgb;

/// Temporal trail state threaded through the frame loop.
///
/// Each frame becomes `frame + strength * previous`, normalized by its peak channel value.
/// The stored `previous` is the blended frame before clamping, so the trail compounds.
#[derive(Clone, Debug)]
pub struct TrailAccumulator {
    strength: f32,
    previous: Option<FrameRgb>,
}

impl TrailAccumulator {
    /// Create an accumulator; `trail_length <= 0` disables blending.
    pub fn new(trail_length: f64) -> Self {
        Self {
            strength: trail_length as f32,
            previous: None,
        }
    }

    /// Whether blending is active.
    pub fn is_enabled(&self) -> bool {
        self.strength > 0.0
    }

    /// The post-blend, pre-clamp frame carried into the next step.
    pub fn previous(&self) -> Option<&FrameRgb> {
        self.previous.as_ref()
    }

    /// Blend `frame` with the trail and return the clamped output frame.
    pub fn blend(&mut self, mut frame: FrameRgb) -> FrameRgb {
        if self.is_enabled()
            && let Some(prev) = self.previous.as_ref()
            && prev.data.len() == frame.data.len()
        {
            for (v, p) in frame.data.iter_mut().zip(&prev.data) {
                *v += self.strength * p;
            }
            let peak = frame.max_value();
            if peak > 0.0 {
                for v in &mut frame.data {
                    *v /= peak;
                }
            }
        }

        self.previous = Some(frame.clone());
        frame.clamp_unit();
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/trail.rs"]
mod tests;
