//! Pure shape geometry: rotation resolution, tapered quads and perturbed circle points.

/// Perturbed circular arc point generation.
pub mod circle;
/// Centered quadrilateral vertices with optional taper.
pub mod quad;
/// Rotation specs and their resolution to radians.
pub mod rotation;
