use std::path::{Path, PathBuf};

use crate::compose::generator::ComposeOpts;
use crate::foundation::error::{ArtError, ArtResult};
use crate::session::naming::default_images_dir;

/// Everything a batch run needs besides the generator and image count.
///
/// Every field has a default, so a JSON config file only has to name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Run seed; image `n` uses `seed + n`. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Directory images are written to.
    pub out_dir: PathBuf,
    /// Tag appended to file names; empty means `vNA`.
    pub version_tag: String,
    /// Sequence number of the first image.
    pub first_sequence: u32,
    /// Registry palette to use for every image; `None` picks one per image.
    pub palette: Option<String>,
    /// Composition tunables.
    pub compose: ComposeOpts,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            seed: None,
            out_dir: default_images_dir(),
            version_tag: String::new(),
            first_sequence: 1,
            palette: None,
            compose: ComposeOpts::default(),
        }
    }
}

impl RenderConfig {
    /// Load a JSON config file.
    pub fn from_path(path: &Path) -> ArtResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ArtError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json(&text).map_err(|e| match e {
            ArtError::Config(msg) => ArtError::config(format!("'{}': {msg}", path.display())),
            other => other,
        })
    }

    /// Parse a JSON config document.
    pub fn from_json(text: &str) -> ArtResult<Self> {
        serde_json::from_str(text).map_err(|e| ArtError::config(e.to_string()))
    }

    /// Set the canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the output directory.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Set the file name tag.
    pub fn with_version_tag(mut self, tag: impl Into<String>) -> Self {
        self.version_tag = tag.into();
        self
    }

    /// Pin every image to one registry palette.
    pub fn with_palette(mut self, name: impl Into<String>) -> Self {
        self.palette = Some(name.into());
        self
    }

    /// Replace the composition tunables.
    pub fn with_compose(mut self, compose: ComposeOpts) -> Self {
        self.compose = compose;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
