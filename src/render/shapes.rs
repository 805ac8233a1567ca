use kurbo::Shape;
use rand::Rng;

use crate::color::rgba::Color;
use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::math::clamp_unit;
use crate::geometry::quad::{TaperSide, quad_path};
use crate::geometry::rotation::RotationSpec;
use crate::render::canvas::{Canvas, StateGuard};

/// Fill paint with its own opacity multiplier.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fill {
    /// Base color.
    pub color: Color,
    /// Opacity in `[0, 1]`, multiplied into the color's alpha.
    pub opacity: f64,
}

/// Stroke paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: f64,
}

/// Independent fill and stroke. A style with neither draws nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeStyle {
    /// Optional fill, painted first.
    pub fill: Option<Fill>,
    /// Optional stroke, painted on top of the fill.
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    /// Fill only.
    pub fn filled(color: Color, opacity: f64) -> Self {
        Self {
            fill: Some(Fill { color, opacity }),
            stroke: None,
        }
    }

    /// Stroke only.
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    /// Add or replace the stroke.
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    /// `true` when neither fill nor stroke is set.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

fn paint_path<C: Canvas + ?Sized>(canvas: &mut C, path: &kurbo::BezPath, style: &ShapeStyle) {
    if let Some(fill) = style.fill {
        let color = fill
            .color
            .with_alpha(clamp_unit(fill.color.a) * clamp_unit(fill.opacity));
        canvas.fill_path(path, color);
    }
    if let Some(stroke) = style.stroke {
        canvas.stroke_path(path, stroke.color, stroke.width);
    }
}

/// Draw a `width x height` quad centered on the current origin, optionally tapered on one side.
pub fn draw_quad<C: Canvas + ?Sized>(
    canvas: &mut C,
    width: f64,
    height: f64,
    taper: f64,
    side: TaperSide,
    style: &ShapeStyle,
) {
    if style.is_empty() {
        return;
    }
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        tracing::debug!(width, height, "skipping degenerate quad");
        return;
    }
    paint_path(canvas, &quad_path(width, height, taper, side), style);
}

/// A rect (or trapezoid) placed in canvas space and rotated about a pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadDraw {
    /// Target rectangle before rotation.
    pub rect: Rect,
    /// Rotation center; defaults to the rect's center.
    pub pivot: Option<Point>,
    /// Rotation, resolved once per draw.
    pub rotation: RotationSpec,
    /// Taper factor, clamped below 1.
    pub taper: f64,
    /// Which edge the taper narrows.
    pub taper_side: TaperSide,
    /// Paint.
    pub style: ShapeStyle,
}

impl QuadDraw {
    /// An untapered, unrotated rect centered on `center`.
    pub fn centered(center: Point, size: Size, style: ShapeStyle) -> Self {
        Self {
            rect: Rect::from_center_size(center, size),
            pivot: None,
            rotation: RotationSpec::None,
            taper: 0.0,
            taper_side: TaperSide::None,
            style,
        }
    }

    /// Replace the rotation.
    pub fn with_rotation(mut self, rotation: RotationSpec) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replace the taper.
    pub fn with_taper(mut self, taper: f64, side: TaperSide) -> Self {
        self.taper = taper;
        self.taper_side = side;
        self
    }
}

/// Draw `q` inside a scoped transform and return the rotation it used, in radians.
pub fn draw_rotated_quad<C, R>(canvas: &mut C, rng: &mut R, q: &QuadDraw) -> f64
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let angle = q.rotation.resolve(rng);
    draw_quad_at_angle(canvas, q, angle);
    angle
}

/// Draw `q` rotated by an already resolved angle.
pub fn draw_quad_at_angle<C: Canvas + ?Sized>(canvas: &mut C, q: &QuadDraw, angle_rad: f64) {
    if q.style.is_empty() {
        return;
    }
    let center = q.rect.center();
    let pivot = q.pivot.unwrap_or(center);

    let mut g = StateGuard::new(canvas);
    g.translate(pivot.to_vec2());
    g.rotate(angle_rad);
    g.translate(center - pivot);
    draw_quad(
        &mut *g,
        q.rect.width(),
        q.rect.height(),
        q.taper,
        q.taper_side,
        &q.style,
    );
}

/// Draw a circle; a non-positive radius draws nothing.
pub fn draw_circle<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    radius: f64,
    style: &ShapeStyle,
) {
    if style.is_empty() {
        return;
    }
    if !(radius.is_finite() && radius > 0.0) {
        tracing::debug!(radius, "skipping circle with non-positive radius");
        return;
    }
    let bounds = Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    );
    let path = kurbo::Ellipse::from_rect(bounds).to_path(0.1);
    paint_path(canvas, &path, style);
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
