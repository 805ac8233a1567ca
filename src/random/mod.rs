//! Biased random sampling helpers shared by every composition.

/// Biased draws, percentage gates and boundary-avoiding steps.
pub mod sampling;
