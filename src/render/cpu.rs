use std::path::Path;

use vello_cpu::peniko::{Compose, Mix};

use crate::color::rgba::Color;
use crate::foundation::core::{Affine, BezPath, CanvasSize, Point, Vec2};
use crate::foundation::error::{ArtError, ArtResult};
use crate::foundation::math::{clamp_unit, unpremultiply_rgba8_in_place};
use crate::render::canvas::{BlendMode, Canvas, StateGuard};

#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Affine,
    alpha: f64,
    blend: BlendMode,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            alpha: 1.0,
            blend: BlendMode::Normal,
        }
    }
}

/// [`Canvas`] rasterized on the CPU by `vello_cpu`.
///
/// Draw calls are queued on a single `vello_cpu::RenderContext`; pixels are produced by
/// [`CpuCanvas::to_rgba8`] or [`CpuCanvas::encode_png`]. Once the surface has been cleared to
/// an opaque color, every output pixel is opaque.
pub struct CpuCanvas {
    size: CanvasSize,
    ctx: vello_cpu::RenderContext,
    state: DrawState,
    stack: Vec<DrawState>,
    opaque_base: bool,
}

impl CpuCanvas {
    /// Allocate a transparent surface.
    ///
    /// Fails when a dimension is zero or does not fit the rasterizer's 16-bit limits.
    pub fn new(width: u32, height: u32) -> ArtResult<Self> {
        let size = CanvasSize::new(width, height);
        if size.is_empty() {
            return Err(ArtError::render(format!(
                "canvas must be non-empty (got {width}x{height})"
            )));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| ArtError::render("canvas width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| ArtError::render("canvas height exceeds u16"))?;

        Ok(Self {
            size,
            ctx: vello_cpu::RenderContext::new(w, h),
            state: DrawState::default(),
            stack: Vec::new(),
            opaque_base: false,
        })
    }

    /// Rasterize everything drawn so far into straight-alpha RGBA8, row-major.
    pub fn to_rgba8(&mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.ctx.width(), self.ctx.height());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        if self.opaque_base {
            // The u8 pipeline rounds source-over coverage at anti-aliased edges to 254.
            for px in data.chunks_exact_mut(4) {
                px[3] = u8::MAX;
            }
        }
        data
    }

    /// `true` once the surface has been cleared to an opaque color.
    pub fn has_opaque_base(&self) -> bool {
        self.opaque_base
    }

    /// Rasterize and write a PNG file, creating the parent directory if needed.
    #[tracing::instrument(skip(self), fields(w = self.size.width, h = self.size.height))]
    pub fn encode_png(&mut self, path: &Path) -> ArtResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ArtError::encode(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }

        let data = self.to_rgba8();
        image::save_buffer_with_format(
            path,
            &data,
            self.size.width,
            self.size.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| ArtError::encode(format!("write png '{}': {e}", path.display())))
    }

    fn prepare_paint(&mut self, color: Color) {
        let [r, g, b, a] = color
            .with_alpha(clamp_unit(color.a) * self.state.alpha)
            .to_rgba8();
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx.set_blend_mode(blend_to_cpu(self.state.blend));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }
}

impl Canvas for CpuCanvas {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(s) => self.state = s,
            None => tracing::warn!("restore without matching save"),
        }
    }

    fn state_depth(&self) -> usize {
        self.stack.len()
    }

    fn translate(&mut self, by: Vec2) {
        self.state.transform = self.state.transform * Affine::translate(by);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform * Affine::rotate(radians);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = clamp_unit(alpha);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        if self.state.alpha <= 0.0 {
            return;
        }
        self.prepare_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        if self.state.alpha <= 0.0 || width.is_nan() || width <= 0.0 {
            return;
        }
        self.prepare_paint(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn clear(&mut self, color: Color) {
        let size = self.size;
        let mut guard = StateGuard::new(self);
        guard.reset_transform();
        guard.set_global_alpha(1.0);
        guard.set_blend_mode(BlendMode::Normal);
        guard.fill_rect(size.rect(), color.with_alpha(1.0));
        guard.opaque_base = true;
    }

    fn reset_transform(&mut self) {
        self.state.transform = Affine::IDENTITY;
    }
}

fn blend_to_cpu(mode: BlendMode) -> vello_cpu::peniko::BlendMode {
    let mix = match mode {
        BlendMode::Normal => Mix::Normal,
        BlendMode::Multiply => Mix::Multiply,
        BlendMode::Screen => Mix::Screen,
        BlendMode::Overlay => Mix::Overlay,
        BlendMode::Darken => Mix::Darken,
        BlendMode::Lighten => Mix::Lighten,
        BlendMode::ColorDodge => Mix::ColorDodge,
        BlendMode::ColorBurn => Mix::ColorBurn,
        BlendMode::SoftLight => Mix::SoftLight,
        BlendMode::HardLight => Mix::HardLight,
        BlendMode::Difference => Mix::Difference,
        BlendMode::Exclusion => Mix::Exclusion,
        BlendMode::Hue => Mix::Hue,
        BlendMode::Saturation => Mix::Saturation,
        BlendMode::Color => Mix::Color,
        BlendMode::Luminosity => Mix::Luminosity,
    };
    vello_cpu::peniko::BlendMode::new(mix, Compose::SrcOver)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
