use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;

use crate::color::rgba::{Color, color_from_hex, make_color};

/// Number of intensity steps used for the registry's monochromatic ramps.
pub const MONOCHROME_STEPS: u32 = 8;

/// Ordered list of colors used as the sampling source for one image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Human-readable name, used in logs.
    pub name: String,
    /// Colors in declaration order.
    pub colors: Vec<Color>,
}

impl Palette {
    /// Construct a palette. Empty palettes are allowed; consumers fall back to gray.
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` when there is nothing to sample.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Uniformly pick one color, or `None` for an empty palette.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[rng.gen_range(0..self.colors.len())])
    }

    /// Pick a color, substituting [`Color::NEUTRAL_GRAY`] for an empty palette.
    pub fn pick_or_gray<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.pick(rng).unwrap_or_else(|| {
            tracing::warn!(palette = %self.name, "empty palette, using neutral gray");
            Color::NEUTRAL_GRAY
        })
    }
}

/// Uniformly pick one color from `palette`; `None` when it is empty.
pub fn pick_color<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> Option<Color> {
    palette.pick(rng)
}

/// Build a palette from hex strings, dropping entries that fail to parse.
pub fn palette_from_hex(name: &str, hexes: &[&str]) -> Palette {
    let colors = hexes
        .iter()
        .filter_map(|h| {
            let c = color_from_hex(h);
            if c.is_none() {
                tracing::warn!(palette = name, entry = *h, "dropping invalid hex color");
            }
            c
        })
        .collect();
    Palette::new(name, colors)
}

/// Hue family for monochromatic ramps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    /// Red channel only.
    Red,
    /// Green channel only.
    Green,
    /// Blue channel only.
    Blue,
    /// Red and green.
    Yellow,
    /// Red with half-intensity green.
    Orange,
    /// Red and blue.
    Violet,
}

impl Hue {
    /// All hue families in registry order.
    pub const ALL: [Hue; 6] = [
        Hue::Red,
        Hue::Green,
        Hue::Blue,
        Hue::Yellow,
        Hue::Orange,
        Hue::Violet,
    ];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Yellow => "yellow",
            Hue::Orange => "orange",
            Hue::Violet => "violet",
        }
    }

    fn tint(self, intensity: f64) -> Color {
        let (r, g, b) = match self {
            Hue::Red => (intensity, 0.0, 0.0),
            Hue::Green => (0.0, intensity, 0.0),
            Hue::Blue => (0.0, 0.0, intensity),
            Hue::Yellow => (intensity, intensity, 0.0),
            Hue::Orange => (intensity, intensity * 0.5, 0.0),
            Hue::Violet => (intensity, 0.0, intensity),
        };
        Color::rgba(r, g, b, 1.0)
    }
}

impl FromStr for Hue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hue::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown hue '{s}' (expected red, green, blue, yellow, orange or violet)")
            })
    }
}

/// `increments + 1` colors whose intensity runs linearly from 0 to 255.
///
/// Returns `None` when `increments` is zero.
pub fn monochrome_palette(hue: Hue, increments: u32) -> Option<Palette> {
    if increments == 0 {
        return None;
    }
    let n = f64::from(increments);
    let colors = (0..=increments)
        .map(|i| hue.tint(f64::from(i) / n))
        .collect();
    Some(Palette::new(format!("mono-{}-{increments}", hue.name()), colors))
}

fn rgb_palette(name: &str, triples: &[(i32, i32, i32)]) -> Palette {
    Palette::new(
        name,
        triples.iter().map(|&(r, g, b)| make_color(r, g, b)).collect(),
    )
}

/// Hand-picked palettes given as RGB triples.
pub fn curated_palettes() -> Vec<Palette> {
    vec![
        rgb_palette(
            "ember",
            &[(255, 94, 58), (255, 149, 0), (255, 204, 0), (140, 28, 19), (38, 12, 8)],
        ),
        rgb_palette(
            "tidepool",
            &[(8, 61, 119), (46, 196, 182), (203, 243, 240), (255, 191, 105), (255, 159, 28)],
        ),
        rgb_palette(
            "orchard",
            &[(76, 114, 29), (162, 197, 35), (241, 227, 179), (215, 84, 56), (94, 38, 18)],
        ),
        rgb_palette(
            "dusk",
            &[(53, 80, 112), (109, 89, 122), (181, 101, 118), (229, 107, 111), (234, 172, 139)],
        ),
        rgb_palette(
            "bauhaus",
            &[(221, 44, 38), (246, 196, 30), (22, 76, 160), (240, 236, 226), (20, 20, 20)],
        ),
        rgb_palette(
            "lichen",
            &[(200, 213, 185), (143, 192, 169), (104, 176, 171), (105, 109, 125), (250, 243, 221)],
        ),
        rgb_palette(
            "neon",
            &[(255, 0, 110), (251, 86, 7), (255, 190, 11), (131, 56, 236), (58, 134, 255)],
        ),
        rgb_palette(
            "slate",
            &[(33, 37, 41), (73, 80, 87), (134, 142, 150), (206, 212, 218), (248, 249, 250)],
        ),
    ]
}

/// Palettes defined by hex strings.
pub fn hex_palettes() -> Vec<Palette> {
    vec![
        palette_from_hex("terracotta", &["#E07A5F", "#3D405B", "#81B29A", "#F2CC8F", "#F4F1DE"]),
        palette_from_hex("glacier", &["#03045E", "#0077B6", "#00B4D8", "#90E0EF", "#CAF0F8"]),
        palette_from_hex("saffron", &["#F6BD60", "#F7EDE2", "#F5CAC3", "#84A59D", "#F28482"]),
        palette_from_hex("midnight", &["#0D1B2A", "#1B263B", "#415A77", "#778DA9", "#E0E1DD"]),
        palette_from_hex("berry", &["#590D22", "#800F2F", "#A4133C", "#FF4D6D", "#FFB3C1"]),
        palette_from_hex("moss", &["#283618", "#606C38", "#FEFAE0", "#DDA15E", "#BC6C25"]),
    ]
}

/// One monochromatic ramp per [`Hue`], each with `steps` increments.
pub fn monochrome_palettes(steps: u32) -> Vec<Palette> {
    Hue::ALL
        .into_iter()
        .filter_map(|h| monochrome_palette(h, steps))
        .collect()
}

static ALL_PALETTES: LazyLock<Vec<Palette>> = LazyLock::new(|| {
    let mut all = curated_palettes();
    all.extend(hex_palettes());
    all.extend(monochrome_palettes(MONOCHROME_STEPS));
    all.retain(|p| !p.is_empty());
    all
});

/// Process-wide palette registry: curated, then hex-derived, then monochromatic.
pub fn all_palettes() -> &'static [Palette] {
    &ALL_PALETTES
}

/// Uniformly choose a palette from the registry.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R) -> &'static Palette {
    let all = all_palettes();
    &all[rng.gen_range(0..all.len())]
}

/// Look up a registry palette by name.
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    all_palettes().iter().find(|p| p.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
