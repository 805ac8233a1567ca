use rand::Rng;

use crate::color::palette::Palette;
use crate::color::rgba::{adjust_lightness, complement};
use crate::compose::mutate::{MutationRates, evolve_color};
use crate::foundation::core::{Point, Size};
use crate::geometry::circle::imperfect_circle_points;
use crate::geometry::quad::TaperSide;
use crate::random::sampling::{biased_uniform, chance};
use crate::render::canvas::Canvas;
use crate::render::shapes::{QuadDraw, ShapeStyle, draw_circle, draw_quad_at_angle};

/// Fewest shapes placed along any arc.
pub const MIN_TRAIN_POINTS: usize = 5;

/// Arc that a radial train follows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Circle center in canvas space.
    pub center: Point,
    /// Circle radius in pixels.
    pub radius: f64,
    /// First point angle, degrees.
    pub start_deg: f64,
    /// Arc span, degrees. Negative spans run counter-clockwise.
    pub arc_deg: f64,
    /// Skip the point wobble and sit exactly on the circle.
    pub crisp: bool,
}

/// Shape sizing and decoration for [`draw_radial_train`].
///
/// Lengths and widths are fractions of the canvas's shorter side.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrainOpts {
    /// Radial length range.
    pub length: (f64, f64),
    /// Bias of the length draw.
    pub length_bias: f64,
    /// Tangential width range.
    pub width: (f64, f64),
    /// Spacing multiplier applied to the widest shape when counting points.
    pub gap_factor: f64,
    /// Upper bound of the derived taper.
    pub max_taper: f64,
    /// Multiplier from `length / radius` to taper.
    pub taper_scale: f64,
    /// Accent circle radius relative to shape width.
    pub accent_ratio: f64,
    /// Largest per-axis point wobble, as a fraction of the shorter side.
    pub wobble: f64,
    /// Fill opacity range.
    pub opacity: (f64, f64),
    /// Percent chance of an outline on a shape.
    pub stroke: f64,
    /// Outline width in pixels.
    pub stroke_width: f64,
    /// Color evolution between shapes.
    pub mutation: MutationRates,
}

impl Default for TrainOpts {
    fn default() -> Self {
        Self {
            length: (0.02, 0.09),
            length_bias: -0.3,
            width: (0.008, 0.024),
            gap_factor: 1.15,
            max_taper: 0.85,
            taper_scale: 2.5,
            accent_ratio: 0.22,
            wobble: 0.004,
            opacity: (0.7, 1.0),
            stroke: 15.0,
            stroke_width: 1.0,
            mutation: MutationRates::default(),
        }
    }
}

impl TrainOpts {
    /// Replace the stroke chance.
    pub fn with_stroke(mut self, percent: f64) -> Self {
        self.stroke = percent;
        self
    }
}

/// How many shapes fit along `ring` when each takes `max_width * gap_factor` of arc.
pub fn train_point_count(ring: &Ring, max_width: f64, gap_factor: f64) -> usize {
    let arc_len = ring.radius.abs() * ring.arc_deg.to_radians().abs();
    let effective = max_width * gap_factor;
    if !(effective.is_finite() && effective > 0.0 && arc_len.is_finite()) {
        return MIN_TRAIN_POINTS;
    }
    ((arc_len / effective).floor() as usize).max(MIN_TRAIN_POINTS)
}

/// Taper for a radial shape of `length` on a ring of `radius`.
pub fn radial_taper(length: f64, radius: f64, scale: f64, max_taper: f64) -> f64 {
    if !(radius > 0.0 && length.is_finite()) {
        return 0.0;
    }
    (length / radius * scale).clamp(0.0, max_taper.max(0.0))
}

/// Lay a train of radially oriented tapered quads along `ring`, each with an accent circle.
///
/// The inner edge of every quad is the narrowed one. Returns the number of shapes placed; an
/// empty palette or a degenerate ring places none.
pub fn draw_radial_train<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    ring: &Ring,
    opts: &TrainOpts,
) -> usize
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let Some(mut color) = palette.pick(rng) else {
        tracing::warn!(palette = %palette.name, "empty palette, skipping radial train");
        return 0;
    };
    let unit = canvas.size().min_side();
    let (len_lo, len_hi) = (opts.length.0 * unit, opts.length.1 * unit);
    let (w_lo, w_hi) = (opts.width.0 * unit, opts.width.1 * unit);

    let count = train_point_count(ring, w_hi, opts.gap_factor);
    let wobble = if ring.crisp { 0.0 } else { opts.wobble * unit };
    let start = ring.start_deg.to_radians();
    let arc = ring.arc_deg.to_radians();
    let points = imperfect_circle_points(rng, ring.center, ring.radius, count, wobble, start, arc);
    tracing::debug!(radius = ring.radius, count = points.len(), "radial train");

    let step = arc / count as f64;
    for (i, &p) in points.iter().enumerate() {
        color = evolve_color(rng, palette, color, &opts.mutation);

        let length = biased_uniform(rng, len_lo, len_hi, opts.length_bias);
        let width = biased_uniform(rng, w_lo, w_hi, 0.0);
        let taper = radial_taper(length, ring.radius, opts.taper_scale, opts.max_taper);
        let opacity = biased_uniform(rng, opts.opacity.0, opts.opacity.1, 0.0);

        let mut style = ShapeStyle::filled(color, opacity);
        if chance(rng, opts.stroke) {
            let edge = adjust_lightness(color, -0.5).unwrap_or(color);
            style = style.with_stroke(edge, opts.stroke_width);
        }
        let q = QuadDraw::centered(p, Size::new(length, width), style)
            .with_taper(taper, TaperSide::Left);
        draw_quad_at_angle(canvas, &q, start + i as f64 * step);

        let accent = ShapeStyle::filled(complement(color), 1.0);
        draw_circle(canvas, p, width * opts.accent_ratio, &accent);
    }
    points.len()
}

/// Concentric full-circle trains around the canvas center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RingsOpts {
    /// Inclusive range of ring counts.
    pub count: (usize, usize),
    /// Innermost and outermost radius, as fractions of the shorter side.
    pub radius: (f64, f64),
    /// Shapes on each ring.
    pub train: TrainOpts,
}

impl Default for RingsOpts {
    fn default() -> Self {
        Self {
            count: (4, 8),
            radius: (0.08, 0.46),
            train: TrainOpts::default(),
        }
    }
}

/// Draw concentric rings; every other ring is crisp. Returns the total shapes placed.
pub fn draw_rings<C, R>(canvas: &mut C, rng: &mut R, palette: &Palette, opts: &RingsOpts) -> usize
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let size = canvas.size();
    let unit = size.min_side();
    let (lo, hi) = if opts.count.0 <= opts.count.1 {
        opts.count
    } else {
        (opts.count.1, opts.count.0)
    };
    let rings = rng.gen_range(lo..=hi).max(1);
    let (r_in, r_out) = (opts.radius.0 * unit, opts.radius.1 * unit);
    let spacing = if rings > 1 {
        (r_out - r_in) / (rings - 1) as f64
    } else {
        0.0
    };

    (0..rings)
        .map(|i| {
            let ring = Ring {
                center: size.center(),
                radius: r_in + spacing * i as f64,
                start_deg: rng.gen_range(0.0..360.0),
                arc_deg: 360.0,
                crisp: i % 2 == 1,
            };
            draw_radial_train(canvas, rng, palette, &ring, &opts.train)
        })
        .sum()
}

/// One train around an off-center point along a random arc.
pub fn draw_single_train<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    opts: &TrainOpts,
) -> usize
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let size = canvas.size();
    let unit = size.min_side();
    let c = size.center();
    let center = Point::new(
        c.x + rng.gen_range(-0.2..=0.2) * size.w(),
        c.y + rng.gen_range(-0.2..=0.2) * size.h(),
    );
    let ring = Ring {
        center,
        radius: rng.gen_range(0.2..=0.4) * unit,
        start_deg: rng.gen_range(0.0..360.0),
        arc_deg: rng.gen_range(120.0..=360.0),
        crisp: rng.gen_bool(0.5),
    };
    draw_radial_train(canvas, rng, palette, &ring, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/train.rs"]
mod tests;
