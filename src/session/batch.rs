use std::path::PathBuf;

use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::palette::{Palette, palette_by_name, random_palette};
use crate::compose::generator::{Generator, compose};
use crate::foundation::error::{ArtError, ArtResult};
use crate::render::cpu::CpuCanvas;
use crate::session::config::RenderConfig;
use crate::session::naming::output_file_name;

/// Outcome of [`render_batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files written, in sequence order.
    pub written: Vec<PathBuf>,
    /// Images skipped after a canvas or encode failure.
    pub failed: usize,
}

impl BatchReport {
    /// `true` when at least one image was requested and none was written.
    pub fn all_failed(&self) -> bool {
        self.written.is_empty() && self.failed > 0
    }
}

/// Per-image generator: `seed + sequence` when seeded, entropy otherwise.
pub fn image_rng(seed: Option<u64>, sequence: u32) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(u64::from(sequence))),
        None => StdRng::from_entropy(),
    }
}

fn select_palette(config: &RenderConfig, rng: &mut StdRng) -> &'static Palette {
    if let Some(name) = config.palette.as_deref() {
        match palette_by_name(name) {
            Some(p) => return p,
            None => tracing::warn!(palette = name, "unknown palette, choosing at random"),
        }
    }
    random_palette(rng)
}

/// Render and write one image.
#[tracing::instrument(skip(config, timestamp), fields(w = config.width, h = config.height))]
pub fn render_image(
    generator: Generator,
    config: &RenderConfig,
    sequence: u32,
    timestamp: NaiveDateTime,
) -> ArtResult<PathBuf> {
    let mut rng = image_rng(config.seed, sequence);
    let palette = select_palette(config, &mut rng);
    let mut canvas = CpuCanvas::new(config.width, config.height)?;

    let out = compose(generator, &mut canvas, &mut rng, palette, &config.compose);

    let path = config
        .out_dir
        .join(output_file_name(timestamp, sequence, &config.version_tag));
    canvas.encode_png(&path)?;
    tracing::info!(
        path = %path.display(),
        palette = %palette.name,
        shapes = out.shapes,
        "wrote image"
    );
    Ok(path)
}

/// Render `count` images in sequence, skipping (and logging) any that fail.
///
/// A zero count is rejected before anything is drawn.
#[tracing::instrument(skip(config))]
pub fn render_batch(
    generator: Generator,
    count: u32,
    config: &RenderConfig,
) -> ArtResult<BatchReport> {
    if count == 0 {
        return Err(ArtError::validation("image count must be at least 1"));
    }
    let timestamp = chrono::Local::now().naive_local();
    let mut report = BatchReport::default();

    for i in 0..count {
        let sequence = config.first_sequence.saturating_add(i);
        match render_image(generator, config, sequence, timestamp) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                tracing::error!(sequence, error = %e, "skipping image");
                report.failed += 1;
            }
        }
    }
    tracing::info!(written = report.written.len(), failed = report.failed, "batch finished");
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
