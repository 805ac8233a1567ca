//! Canvas abstraction, its CPU and recording implementations, and shape drawing on top of it.

/// `Canvas` trait, blend modes and the scoped state guard.
pub mod canvas;
/// `vello_cpu`-backed canvas with PNG output.
pub mod cpu;
/// Canvas that records draw calls for inspection.
pub mod recording;
/// Quads, rotated quads and circles with independent fill and stroke.
pub mod shapes;
