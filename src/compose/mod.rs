//! Composition algorithms: backgrounds, lane grids and the generator routines built on them.

/// Layered translucent backgrounds.
pub mod background;
/// Generator registry and the full-image entry point.
pub mod generator;
/// Scatter around a jittered lane grid.
pub mod lanes;
/// Step-to-step color evolution.
pub mod mutate;
/// Radial trains of tapered quads.
pub mod train;
/// Drifting random walk.
pub mod wander;
/// Fuzzy evenly spaced grid lines.
pub mod zones;
