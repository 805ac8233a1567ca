use rand::Rng;

use crate::color::palette::Palette;
use crate::color::rgba::adjust_lightness;
use crate::compose::mutate::{MutationRates, evolve_color};
use crate::compose::zones::line_zones;
use crate::foundation::core::{Point, Size};
use crate::geometry::rotation::RotationSpec;
use crate::random::sampling::{biased_uniform, chance};
use crate::render::canvas::Canvas;
use crate::render::shapes::{QuadDraw, ShapeStyle, draw_circle, draw_rotated_quad};

/// Lane-scatter parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LaneOpts {
    /// Inclusive range of row counts.
    pub rows: (usize, usize),
    /// Inclusive range of column counts, drawn per row.
    pub columns: (usize, usize),
    /// Jitter of every grid line, as a fraction of its ideal spacing.
    pub fuzziness: f64,
    /// Total scatter iterations shared evenly by all cells.
    pub iterations: usize,
    /// Per-row percent of iterations skipped, drawn uniformly from this range.
    pub thin_out: (f64, f64),
    /// Per-row lightness shift range, applied after the other color transforms.
    pub dimming: (f64, f64),
    /// Bias of the dimming draw.
    pub dimming_bias: f64,
    /// Largest offset from a cell's center, as a fraction of the cell spacing.
    pub spread: f64,
    /// Shape size range, as a fraction of the smaller cell spacing.
    pub shape_size: (f64, f64),
    /// Chance a scatter shape is a circle rather than a rect.
    pub circle: f64,
    /// Rect rotation spread, degrees either way.
    pub max_rotation_deg: f64,
    /// Fill opacity range.
    pub opacity: (f64, f64),
    /// Color evolution between shapes.
    pub mutation: MutationRates,
}

impl Default for LaneOpts {
    fn default() -> Self {
        Self {
            rows: (3, 7),
            columns: (3, 9),
            fuzziness: 0.35,
            iterations: 6000,
            thin_out: (0.0, 45.0),
            dimming: (-0.4, 0.0),
            dimming_bias: 0.5,
            spread: 0.45,
            shape_size: (0.04, 0.22),
            circle: 30.0,
            max_rotation_deg: 45.0,
            opacity: (0.35, 0.85),
            mutation: MutationRates::default(),
        }
    }
}

impl LaneOpts {
    /// Replace the iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// One jittered row and the column lines inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    /// Row line position.
    pub y: f64,
    /// Column line positions.
    pub xs: Vec<f64>,
}

/// Partition the canvas into jittered rows, each with its own jittered column count.
pub fn lane_grid<R: Rng + ?Sized>(
    rng: &mut R,
    width: f64,
    height: f64,
    opts: &LaneOpts,
) -> Vec<Lane> {
    let rows = inclusive(rng, opts.rows);
    line_zones(rng, 0.0, height, rows, opts.fuzziness)
        .into_iter()
        .map(|y| {
            let columns = inclusive(rng, opts.columns);
            Lane {
                y,
                xs: line_zones(rng, 0.0, width, columns, opts.fuzziness),
            }
        })
        .collect()
}

fn inclusive<R: Rng + ?Sized>(rng: &mut R, (a, b): (usize, usize)) -> usize {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi).max(1)
}

/// Scatter small shapes around every cell of a jittered lane grid.
///
/// Returns the number of shapes drawn; an empty palette draws none.
pub fn run_lanes<C, R>(canvas: &mut C, rng: &mut R, palette: &Palette, opts: &LaneOpts) -> usize
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let Some(mut color) = palette.pick(rng) else {
        tracing::warn!(palette = %palette.name, "empty palette, skipping lanes");
        return 0;
    };
    let size = canvas.size();
    let grid = lane_grid(rng, size.w(), size.h(), opts);
    let cells: usize = grid.iter().map(|lane| lane.xs.len()).sum();
    if cells == 0 {
        return 0;
    }
    let per_cell = opts.iterations / cells;
    let row_spacing = size.h() / (grid.len() + 1) as f64;
    tracing::debug!(rows = grid.len(), cells, per_cell, "lane grid");

    let mut drawn = 0;
    for lane in &grid {
        let thin_out = biased_uniform(rng, opts.thin_out.0, opts.thin_out.1, 0.0);
        let dim = biased_uniform(rng, opts.dimming.0, opts.dimming.1, opts.dimming_bias);
        let col_spacing = size.w() / (lane.xs.len() + 1) as f64;
        let cell_min = col_spacing.min(row_spacing);
        let (reach_x, reach_y) = (opts.spread * col_spacing, opts.spread * row_spacing);

        for &x in &lane.xs {
            for _ in 0..per_cell {
                if chance(rng, thin_out) {
                    continue;
                }
                color = evolve_color(rng, palette, color, &opts.mutation);
                let shown = adjust_lightness(color, dim).unwrap_or(color);

                let at = Point::new(
                    x + biased_uniform(rng, -reach_x, reach_x, 0.0),
                    lane.y + biased_uniform(rng, -reach_y, reach_y, 0.0),
                );
                let side =
                    cell_min * biased_uniform(rng, opts.shape_size.0, opts.shape_size.1, -0.3);
                let opacity = biased_uniform(rng, opts.opacity.0, opts.opacity.1, 0.0);
                let style = ShapeStyle::filled(shown, opacity);

                if chance(rng, opts.circle) {
                    draw_circle(canvas, at, side * 0.5, &style);
                } else {
                    let q = QuadDraw::centered(at, Size::new(side, side), style)
                        .with_rotation(RotationSpec::jitter(opts.max_rotation_deg));
                    draw_rotated_quad(canvas, rng, &q);
                }
                drawn += 1;
            }
        }
    }
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/compose/lanes.rs"]
mod tests;
