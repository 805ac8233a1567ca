use rand::Rng;

use crate::color::palette::Palette;
use crate::color::rgba::{Color, adjust_lightness, complement, gray_tone};
use crate::random::sampling::{biased_uniform, chance};

/// Percent chances and magnitudes for step-to-step color evolution.
///
/// The gates are evaluated in a fixed order: palette reselect, complement, lighten/darken,
/// gray-mix. Reordering them changes the look of every composition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MutationRates {
    /// Percent chance to jump to a fresh palette color.
    pub reselect: f64,
    /// Percent chance to invert the color.
    pub complement: f64,
    /// Percent chance to lighten or darken.
    pub lightness: f64,
    /// Largest lighten/darken amount, as a fraction of the remaining distance.
    pub lightness_span: f64,
    /// Percent chance to blend toward gray.
    pub gray: f64,
    /// Gray-mix strength range.
    pub gray_strength: (f64, f64),
}

impl Default for MutationRates {
    fn default() -> Self {
        Self {
            reselect: 8.0,
            complement: 3.0,
            lightness: 12.0,
            lightness_span: 0.35,
            gray: 6.0,
            gray_strength: (0.15, 0.6),
        }
    }
}

/// Derive the next color from `previous`, mostly by small mutations.
///
/// Failed transforms keep the color they were applied to.
pub fn evolve_color<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &Palette,
    previous: Color,
    rates: &MutationRates,
) -> Color {
    let mut c = previous;

    if chance(rng, rates.reselect) {
        c = palette.pick(rng).unwrap_or(c);
    }
    if chance(rng, rates.complement) {
        c = complement(c);
    }
    if chance(rng, rates.lightness) {
        let span = rates.lightness_span.abs();
        let amount = biased_uniform(rng, -span, span, 0.0);
        c = adjust_lightness(c, amount).unwrap_or(c);
    }
    if chance(rng, rates.gray) {
        let (lo, hi) = rates.gray_strength;
        let strength = biased_uniform(rng, lo, hi, 0.0);
        c = gray_tone(c, strength).unwrap_or(c);
    }
    c
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mutate.rs"]
mod tests;
