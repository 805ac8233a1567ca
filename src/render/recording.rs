use crate::color::rgba::Color;
use crate::foundation::core::{Affine, BezPath, CanvasSize, Vec2};
use crate::render::canvas::{BlendMode, Canvas};

/// Paint operation kind captured by [`RecordingCanvas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintKind {
    /// Path fill.
    Fill,
    /// Path stroke with the given width.
    Stroke {
        /// Line width.
        width: f64,
    },
}

/// One recorded draw, with the drawing state that was active when it was issued.
#[derive(Clone, Debug)]
pub struct RecordedOp {
    /// Fill or stroke.
    pub kind: PaintKind,
    /// Path in local coordinates.
    pub path: BezPath,
    /// Paint color before global alpha.
    pub color: Color,
    /// Transform active at draw time.
    pub transform: Affine,
    /// Global alpha active at draw time.
    pub alpha: f64,
    /// Blend mode active at draw time.
    pub blend: BlendMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
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

/// In-memory [`Canvas`] that records draw calls instead of rasterizing.
///
/// Useful for inspecting what a composition did without touching pixels.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    size: CanvasSize,
    state: DrawState,
    stack: Vec<DrawState>,
    ops: Vec<RecordedOp>,
    unbalanced_restores: usize,
}

impl RecordingCanvas {
    /// Create an empty recording surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: CanvasSize::new(width, height),
            state: DrawState::default(),
            stack: Vec::new(),
            ops: Vec::new(),
            unbalanced_restores: 0,
        }
    }

    /// Recorded operations in issue order.
    pub fn ops(&self) -> &[RecordedOp] {
        &self.ops
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    /// Current global alpha.
    pub fn global_alpha(&self) -> f64 {
        self.state.alpha
    }

    /// Current blend mode.
    pub fn blend_mode(&self) -> BlendMode {
        self.state.blend
    }

    /// Number of `restore` calls that had nothing to pop.
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// `true` when the drawing state is back at its defaults with nothing left saved.
    pub fn is_pristine_state(&self) -> bool {
        self.stack.is_empty() && self.unbalanced_restores == 0 && self.state == DrawState::default()
    }

    fn record(&mut self, kind: PaintKind, path: &BezPath, color: Color) {
        self.ops.push(RecordedOp {
            kind,
            path: path.clone(),
            color,
            transform: self.state.transform,
            alpha: self.state.alpha,
            blend: self.state.blend,
        });
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(s) => self.state = s,
            None => self.unbalanced_restores += 1,
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
        self.state.alpha = crate::foundation::math::clamp_unit(alpha);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.record(PaintKind::Fill, path, color);
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.record(PaintKind::Stroke { width }, path, color);
    }

    fn reset_transform(&mut self) {
        self.state.transform = Affine::IDENTITY;
    }
}
