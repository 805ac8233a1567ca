//! Color values, color transforms and the palette registry.

/// Palette type, registry and monochromatic ramp generator.
pub mod palette;
/// RGBA color value and pure color transforms.
pub mod rgba;
