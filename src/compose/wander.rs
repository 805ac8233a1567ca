use rand::Rng;

use crate::color::palette::Palette;
use crate::color::rgba::adjust_lightness;
use crate::compose::mutate::{MutationRates, evolve_color};
use crate::foundation::core::{Point, Size};
use crate::geometry::quad::TaperSide;
use crate::geometry::rotation::RotationSpec;
use crate::random::sampling::{
    Avoidance, biased_index, biased_uniform, chance, step_avoiding_bounds,
};
use crate::render::canvas::Canvas;
use crate::render::shapes::{QuadDraw, ShapeStyle, draw_quad_at_angle};

/// Random-walk parameters. Percent fields are chances per step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WanderOpts {
    /// Number of shapes.
    pub steps: usize,
    /// Chance to teleport to a fresh random position.
    pub jump: f64,
    /// Chance to drop the running angle and start from a fresh one.
    pub rotation_reset: f64,
    /// Spread of a fresh angle, degrees either way.
    pub reset_spread_deg: f64,
    /// Spread of the per-step drift added to the running angle, degrees either way.
    pub drift_spread_deg: f64,
    /// Largest per-axis step, as a fraction of the shorter side.
    pub max_step: f64,
    /// Wall braking.
    pub avoidance: Avoidance,
    /// Smallest shape side in pixels.
    pub min_size: f64,
    /// Largest shape side, as a fraction of the shorter side.
    pub max_size: f64,
    /// Bias of the size draw; negative favors small shapes.
    pub size_bias: f64,
    /// Chance a shape is square.
    pub square: f64,
    /// Height-to-width range of non-square shapes.
    pub aspect: (f64, f64),
    /// Fill opacity range.
    pub opacity: (f64, f64),
    /// Chance of an outline.
    pub stroke: f64,
    /// Outline width in pixels.
    pub stroke_width: f64,
    /// Chance of a taper on a random edge.
    pub taper: f64,
    /// Taper amount range.
    pub taper_amount: (f64, f64),
    /// Color evolution between steps.
    pub mutation: MutationRates,
}

impl Default for WanderOpts {
    fn default() -> Self {
        Self {
            steps: 2500,
            jump: 1.5,
            rotation_reset: 8.0,
            reset_spread_deg: 10.0,
            drift_spread_deg: 4.0,
            max_step: 0.02,
            avoidance: Avoidance::default(),
            min_size: 4.0,
            max_size: 0.06,
            size_bias: -0.5,
            square: 35.0,
            aspect: (0.3, 0.9),
            opacity: (0.55, 0.95),
            stroke: 20.0,
            stroke_width: 1.0,
            taper: 25.0,
            taper_amount: (0.1, 0.6),
            mutation: MutationRates::default(),
        }
    }
}

impl WanderOpts {
    /// Replace the step count.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Walk a shape across the canvas, drawing one rect per step.
///
/// Position, rotation and color all carry over between steps so the trail drifts instead of
/// scattering. Returns the number of shapes drawn; an empty palette draws none.
pub fn run_wander<C, R>(canvas: &mut C, rng: &mut R, palette: &Palette, opts: &WanderOpts) -> usize
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let Some(mut color) = palette.pick(rng) else {
        tracing::warn!(palette = %palette.name, "empty palette, nothing to wander with");
        return 0;
    };
    let size = canvas.size();
    let unit = size.min_side();
    let max_step = (opts.max_step * unit).max(1.0);
    let max_side = (opts.max_size * unit).max(opts.min_size);

    let random_point = |rng: &mut R| {
        Point::new(
            rng.gen_range(0.0..=size.w()),
            rng.gen_range(0.0..=size.h()),
        )
    };
    let mut pos = random_point(rng);
    let mut angle = RotationSpec::jitter(opts.reset_spread_deg).resolve(rng);

    for step in 0..opts.steps {
        if step > 0 {
            if chance(rng, opts.jump) {
                pos = random_point(rng);
            } else {
                pos.x = step_avoiding_bounds(rng, pos.x, 0.0, size.w(), max_step, opts.avoidance);
                pos.y = step_avoiding_bounds(rng, pos.y, 0.0, size.h(), max_step, opts.avoidance);
            }

            let rotation = if chance(rng, opts.rotation_reset) {
                RotationSpec::jitter(opts.reset_spread_deg)
            } else {
                RotationSpec::around(angle, -opts.drift_spread_deg, opts.drift_spread_deg)
            };
            angle = rotation.resolve(rng);
            color = evolve_color(rng, palette, color, &opts.mutation);
        }

        let w = biased_uniform(rng, opts.min_size, max_side, opts.size_bias);
        let h = if chance(rng, opts.square) {
            w
        } else {
            w * biased_uniform(rng, opts.aspect.0, opts.aspect.1, 0.0)
        };

        let opacity = biased_uniform(rng, opts.opacity.0, opts.opacity.1, 0.0);
        let mut style = ShapeStyle::filled(color, opacity);
        if chance(rng, opts.stroke) {
            let edge = adjust_lightness(color, -0.5).unwrap_or(color);
            style = style.with_stroke(edge, opts.stroke_width);
        }

        let mut q = QuadDraw::centered(pos, Size::new(w, h), style);
        if chance(rng, opts.taper) {
            let last = TaperSide::EDGES.len() as i64 - 1;
            let side = TaperSide::EDGES[biased_index(rng, 0, last, 0.0) as usize];
            q = q.with_taper(
                biased_uniform(rng, opts.taper_amount.0, opts.taper_amount.1, 0.0),
                side,
            );
        }
        draw_quad_at_angle(canvas, &q, angle);
    }
    tracing::debug!(steps = opts.steps, "wander finished");
    opts.steps
}

#[cfg(test)]
#[path = "../../tests/unit/compose/wander.rs"]
mod tests;
