use rand::Rng;

use crate::color::palette::Palette;
use crate::color::rgba::{Color, adjust_lightness, make_color};
use crate::foundation::core::{Point, Size};
use crate::geometry::rotation::RotationSpec;
use crate::random::sampling::biased_index;
use crate::render::canvas::{BlendMode, Canvas, StateGuard};
use crate::render::shapes::{QuadDraw, ShapeStyle, draw_rotated_quad};

/// Overall tone of a layered background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStyle {
    /// Dark base with darkened layers; any blend mode.
    #[default]
    Dark,
    /// Light base with lightened layers; avoids modes that wash out.
    Light,
}

impl BackgroundStyle {
    /// Base fill used when none is configured.
    pub fn default_base(self) -> Color {
        match self {
            BackgroundStyle::Dark => make_color(18, 20, 28),
            BackgroundStyle::Light => make_color(240, 236, 226),
        }
    }

    /// Blend modes a layer may draw with.
    pub fn blend_modes(self) -> Vec<BlendMode> {
        match self {
            BackgroundStyle::Dark => BlendMode::ALL.to_vec(),
            BackgroundStyle::Light => BlendMode::ALL
                .into_iter()
                .filter(|m| !m.washes_out())
                .collect(),
        }
    }
}

/// Tunables for [`draw_layered_background`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackgroundOpts {
    /// Tone.
    pub style: BackgroundStyle,
    /// Explicit base fill; `None` uses the style default.
    pub base: Option<Color>,
    /// Number of translucent layers.
    pub layer_count: usize,
    /// Lower bound of per-layer alpha.
    pub min_alpha: f64,
    /// Upper bound of per-layer alpha.
    pub max_alpha: f64,
    /// Layers rotate uniformly within `[-max_rotation_deg, max_rotation_deg]`.
    pub max_rotation_deg: f64,
    /// Range of the lightness shift pushed toward the style's tone.
    pub tone_shift: (f64, f64),
}

impl Default for BackgroundOpts {
    fn default() -> Self {
        Self {
            style: BackgroundStyle::Dark,
            base: None,
            layer_count: 14,
            min_alpha: 0.05,
            max_alpha: 0.3,
            max_rotation_deg: 30.0,
            tone_shift: (0.3, 0.7),
        }
    }
}

impl BackgroundOpts {
    /// Replace the style.
    pub fn with_style(mut self, style: BackgroundStyle) -> Self {
        self.style = style;
        self
    }
}

/// Fill the canvas with a base color, then stack large translucent rotated rectangles.
///
/// Returns the number of layers drawn. An empty palette leaves only the base fill.
pub fn draw_layered_background<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    opts: &BackgroundOpts,
) -> usize
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let size = canvas.size();
    canvas.clear(opts.base.unwrap_or_else(|| opts.style.default_base()));

    if palette.is_empty() {
        tracing::warn!(palette = %palette.name, "empty palette, background keeps base fill only");
        return 0;
    }

    let modes = opts.style.blend_modes();
    let (alpha_lo, alpha_hi) = ordered(opts.min_alpha, opts.max_alpha);
    let (shift_lo, shift_hi) = ordered(opts.tone_shift.0.abs(), opts.tone_shift.1.abs());

    for _ in 0..opts.layer_count {
        let w = size.w() * rng.gen_range(0.5..=1.5);
        let h = size.h() * rng.gen_range(0.5..=1.5);
        let center = Point::new(
            rng.gen_range(0.0..=size.w()),
            rng.gen_range(0.0..=size.h()),
        );
        let alpha = uniform(rng, alpha_lo, alpha_hi);
        let mode = modes[biased_index(rng, 0, modes.len() as i64 - 1, 0.0) as usize];

        let base = palette.pick_or_gray(rng);
        let shift = uniform(rng, shift_lo, shift_hi);
        let shift = match opts.style {
            BackgroundStyle::Dark => -shift,
            BackgroundStyle::Light => shift,
        };
        let color = adjust_lightness(base, shift).unwrap_or(base);

        let mut g = StateGuard::new(canvas);
        g.set_global_alpha(alpha);
        g.set_blend_mode(mode);
        let q = QuadDraw::centered(center, Size::new(w, h), ShapeStyle::filled(color, 1.0))
            .with_rotation(RotationSpec::jitter(opts.max_rotation_deg));
        draw_rotated_quad(&mut *g, rng, &q);
    }
    opts.layer_count
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi { rng.gen_range(lo..=hi) } else { lo }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/background.rs"]
mod tests;
