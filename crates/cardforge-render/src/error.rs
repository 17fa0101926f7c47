//! Error types for the render core.

use thiserror::Error;

/// Failures that can occur while rasterizing a card.
///
/// The UI catches these at the export boundary, logs them, and returns the
/// card to its idle state; nothing here surfaces to the user.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The composed SVG scene failed to parse.
    #[error("scene parse error: {0}")]
    Scene(#[from] resvg::usvg::Error),

    /// The output pixel buffer could not be allocated.
    #[error("cannot allocate {width}x{height} output surface")]
    Surface { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encode error: {0}")]
    Encode(#[from] image::ImageError),
}
