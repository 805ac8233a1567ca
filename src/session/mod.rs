/// Render-and-write loop over a numbered series of images.
pub mod batch;
/// Run configuration and its JSON loader.
pub mod config;
/// Output file naming.
pub mod naming;
