use std::path::PathBuf;

use chrono::NaiveDateTime;

/// Tag used when none was given.
pub const PLACEHOLDER_TAG: &str = "vNA";

/// `art_<YYYYMMDD_HHmmss>_<5-digit sequence>_<tag>.png`.
///
/// Characters outside `[A-Za-z0-9._-]` in the tag become `_`; an empty tag becomes
/// [`PLACEHOLDER_TAG`].
pub fn output_file_name(timestamp: NaiveDateTime, sequence: u32, tag: &str) -> String {
    let tag = tag.trim();
    let tag: String = if tag.is_empty() {
        PLACEHOLDER_TAG.to_owned()
    } else {
        tag.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    };
    format!(
        "art_{}_{sequence:05}_{tag}.png",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// `images` next to the working directory.
pub fn default_images_dir() -> PathBuf {
    PathBuf::from("..").join("images")
}

#[cfg(test)]
#[path = "../../tests/unit/session/naming.rs"]
mod tests;
