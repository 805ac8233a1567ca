pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Construct a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a float, for geometry math.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float, for geometry math.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// The smaller of the two dimensions.
    pub fn min_side(self) -> f64 {
        self.w().min(self.h())
    }

    /// Geometric center of the surface.
    pub fn center(self) -> Point {
        Point::new(self.w() * 0.5, self.h() * 0.5)
    }

    /// Full-surface rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }

    /// `true` if either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
