use crate::eval::timeline::Pose;
use crate::foundation::core::{BezPath, FrameSize, Rgb8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::shapes::{ShapeStyle, shape_outline};

/// CPU rasterizer powered by `vello_cpu`.
///
/// One frame is recorded between [`CpuRasterizer::begin_frame`] and
/// [`CpuRasterizer::finish_frame`]; draws land in call order, so later shapes cover earlier ones.
pub struct CpuRasterizer {
    size: FrameSize,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRasterizer {
    /// Create a rasterizer for frames of `size`.
    pub fn new(size: FrameSize) -> MotionResult<Self> {
        let (w, h) = match (u16::try_from(size.width), u16::try_from(size.height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(MotionError::validation(format!(
                    "frame size {}x{} is outside the rasterizer's supported range",
                    size.width, size.height
                )));
            }
        };
        Ok(Self {
            size,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Frame size this rasterizer renders.
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Start a new frame filled with `bg`.
    pub fn begin_frame(&mut self, bg: Rgb8) {
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(bg));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.size.width),
            f64::from(self.size.height),
        ));
    }

    /// Draw one shape at `pose`: filled interior, then the outline when a border is set.
    pub fn draw_shape(&mut self, style: &ShapeStyle, pose: Pose) {
        let rotation = if style.kind.is_rotatable() {
            pose.rotation_deg
        } else {
            0.0
        };
        let outline = bezpath_to_cpu(&shape_outline(
            style.kind,
            pose.position,
            style.size,
            rotation,
        ));

        self.ctx.set_paint(to_cpu_color(style.fill));
        self.ctx.fill_path(&outline);

        if style.border_width > 0 {
            self.ctx
                .set_stroke(vello_cpu::kurbo::Stroke::new(f64::from(style.border_width)));
            self.ctx.set_paint(to_cpu_color(style.border_color));
            self.ctx.stroke_path(&outline);
        }
    }

    /// Rasterize the recorded frame and return its RGBA8 pixels.
    ///
    /// The background is opaque, so the premultiplied output equals straight RGBA.
    pub fn finish_frame(&mut self) -> &[u8] {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.pixmap.data_as_u8_slice()
    }
}

fn to_cpu_color(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
