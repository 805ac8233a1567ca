use std::ops::{Deref, DerefMut};

use kurbo::Shape;

use crate::color::rgba::Color;
use crate::foundation::core::{BezPath, CanvasSize, Rect, Vec2};

/// Separable and non-separable blend modes understood by every [`Canvas`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source-over.
    #[default]
    Normal,
    /// Multiply.
    Multiply,
    /// Screen.
    Screen,
    /// Overlay.
    Overlay,
    /// Darken.
    Darken,
    /// Lighten.
    Lighten,
    /// Color dodge.
    ColorDodge,
    /// Color burn.
    ColorBurn,
    /// Soft light.
    SoftLight,
    /// Hard light.
    HardLight,
    /// Difference.
    Difference,
    /// Exclusion.
    Exclusion,
    /// Hue.
    Hue,
    /// Saturation.
    Saturation,
    /// Color.
    Color,
    /// Luminosity.
    Luminosity,
}

impl BlendMode {
    /// Every supported mode.
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    /// Modes that tend to blow out light backgrounds.
    pub fn washes_out(self) -> bool {
        matches!(
            self,
            BlendMode::Darken | BlendMode::Lighten | BlendMode::ColorDodge | BlendMode::ColorBurn
        )
    }
}

/// A mutable raster surface with a save/restore drawing-state stack.
///
/// The drawing state is the current transform, global alpha and blend mode. `save` pushes a
/// copy of it and `restore` pops back. Prefer [`StateGuard`] over calling the pair by hand.
pub trait Canvas {
    /// Surface dimensions.
    fn size(&self) -> CanvasSize;

    /// Push the current drawing state.
    fn save(&mut self);

    /// Pop the most recently saved drawing state. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Number of saves not yet restored.
    fn state_depth(&self) -> usize;

    /// Post-multiply a translation into the current transform.
    fn translate(&mut self, by: Vec2);

    /// Post-multiply a rotation (radians) into the current transform.
    fn rotate(&mut self, radians: f64);

    /// Set the alpha multiplier applied to subsequent draws, clamped into `[0, 1]`.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Set the blend mode for subsequent draws.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Fill a closed path (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke a path with the given line width.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fill an axis-aligned rectangle in the current transform.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_path(&rect.to_path(0.1), color);
    }

    /// Cover the whole surface with an opaque color, ignoring the current transform.
    fn clear(&mut self, color: Color) {
        let size = self.size();
        let mut guard = StateGuard::new(self);
        guard.reset_transform();
        guard.set_global_alpha(1.0);
        guard.set_blend_mode(BlendMode::Normal);
        guard.fill_rect(size.rect(), color.with_alpha(1.0));
    }

    /// Replace the current transform with the identity.
    fn reset_transform(&mut self);
}

/// Scoped save/restore: saves on construction and restores on drop, on every exit path.
pub struct StateGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> StateGuard<'a, C> {
    /// Save `canvas` state; it is restored when the guard goes out of scope.
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
