//! artforge generates PNG artworks from layered, randomized geometric shapes.
//!
//! An image is made in three steps:
//!
//! - choose a [`Palette`] from the registry
//! - paint a layered background and a foreground [`Generator`] onto a [`Canvas`]
//! - encode the [`CpuCanvas`] to PNG
//!
//! [`render_batch`] runs those steps for a numbered series of images. Everything below it is
//! usable on its own: the color transforms, the biased samplers and the shape primitives take
//! an explicit `rand::Rng` and draw onto any [`Canvas`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Color values, transforms and the palette registry.
pub mod color;
/// Composition algorithms and generator routines.
pub mod compose;
/// Shape geometry.
pub mod geometry;
/// Biased random sampling.
pub mod random;
/// Canvas backends and shape drawing.
pub mod render;
/// Batch configuration, naming and execution.
pub mod session;

mod foundation;

pub use crate::foundation::core::{Affine, BezPath, CanvasSize, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{ArtError, ArtResult};

pub use crate::color::palette::{Hue, Palette, all_palettes, pick_color, random_palette};
pub use crate::color::rgba::{
    Color, adjust_lightness, color_from_hex, complement, gray_tone, make_color, make_color_rgba,
};
pub use crate::compose::generator::{ComposeOpts, Composition, Generator, compose};
pub use crate::geometry::quad::TaperSide;
pub use crate::geometry::rotation::RotationSpec;
pub use crate::render::canvas::{BlendMode, Canvas, StateGuard};
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::recording::RecordingCanvas;
pub use crate::session::batch::{BatchReport, render_batch, render_image};
pub use crate::session::config::RenderConfig;
