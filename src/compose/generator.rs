use std::str::FromStr;

use rand::Rng;

use crate::color::palette::Palette;
use crate::compose::background::{BackgroundOpts, BackgroundStyle, draw_layered_background};
use crate::compose::lanes::{LaneOpts, run_lanes};
use crate::compose::train::{RingsOpts, TrainOpts, draw_rings, draw_single_train};
use crate::compose::wander::{WanderOpts, run_wander};
use crate::render::canvas::Canvas;

/// Named image routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generator {
    /// One radial train along a random arc.
    Train,
    /// Concentric full-circle trains.
    Rings,
    /// Random walk of drifting rects.
    Wander,
    /// Scatter around a jittered lane grid.
    Lanes,
}

impl Generator {
    /// Every generator, in listing order.
    pub const ALL: [Generator; 4] = [
        Generator::Train,
        Generator::Rings,
        Generator::Wander,
        Generator::Lanes,
    ];

    /// Lowercase name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Generator::Train => "train",
            Generator::Rings => "rings",
            Generator::Wander => "wander",
            Generator::Lanes => "lanes",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = Generator::ALL.iter().map(|g| g.name()).collect();
                format!("unknown generator '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Options for every composition, overridable from a config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeOpts {
    /// Fixed background tone; `None` flips a coin per image.
    pub background_style: Option<BackgroundStyle>,
    /// Background layering.
    pub background: BackgroundOpts,
    /// Single train.
    pub train: TrainOpts,
    /// Concentric rings.
    pub rings: RingsOpts,
    /// Random walk.
    pub wander: WanderOpts,
    /// Lane scatter.
    pub lanes: LaneOpts,
}

/// Summary of one composed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Composition {
    /// Background tone used.
    pub style: BackgroundStyle,
    /// Background layers drawn.
    pub layers: usize,
    /// Foreground shapes drawn.
    pub shapes: usize,
}

/// Paint a full image: layered background, then the generator's foreground.
pub fn compose<C, R>(
    generator: Generator,
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    opts: &ComposeOpts,
) -> Composition
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let style = opts.background_style.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            BackgroundStyle::Dark
        } else {
            BackgroundStyle::Light
        }
    });
    let background = opts.background.with_style(style);
    let layers = draw_layered_background(canvas, rng, palette, &background);

    let shapes = match generator {
        Generator::Train => draw_single_train(canvas, rng, palette, &opts.train),
        Generator::Rings => draw_rings(canvas, rng, palette, &opts.rings),
        Generator::Wander => run_wander(canvas, rng, palette, &opts.wander),
        Generator::Lanes => run_lanes(canvas, rng, palette, &opts.lanes),
    };
    tracing::debug!(%generator, palette = %palette.name, ?style, layers, shapes, "composed");

    Composition {
        style,
        layers,
        shapes,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/generator.rs"]
mod tests;
