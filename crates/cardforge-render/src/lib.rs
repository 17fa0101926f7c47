//! Cardforge Render Core
//!
//! UI-free rendering core for Cardforge: the style catalog, export filename
//! derivation, per-skin scene composition, and PNG rasterization.
//!
//! ## Overview
//!
//! A card is described by a [`Card`] value (text + design skin + aspect
//! ratio). The [`skin`] module composes that value into an SVG scene whose
//! structure mirrors the live preview, and [`Rasterizer`] renders the scene
//! to PNG bytes at a 3x pixel-density multiplier.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cardforge_render::{AspectRatio, Card, Design, Rasterizer, SurfaceSize};
//!
//! let rasterizer = Rasterizer::new();
//! let card = Card::new("Hello World", Design::NeonGlow, AspectRatio::Widescreen);
//! let png = rasterizer.render_png(&card, SurfaceSize::for_aspect(card.aspect))?;
//! std::fs::write("Hello_World.png", png)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod catalog;
mod error;
mod filename;
pub mod skin;
mod raster;

pub use catalog::{AspectRatio, Design};
pub use error::RenderError;
pub use filename::export_file_name;
pub use raster::{Rasterizer, SurfaceSize, PIXEL_RATIO};
pub use skin::PLACEHOLDER_TEXT;

/// Everything needed to render one card.
///
/// Pure input to the rasterizer; carries no cached or derived state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub text: String,
    pub design: Design,
    pub aspect: AspectRatio,
}

impl Card {
    pub fn new(text: impl Into<String>, design: Design, aspect: AspectRatio) -> Self {
        Self {
            text: text.into(),
            design,
            aspect,
        }
    }

    /// True when the card has visible text (non-empty after trimming).
    ///
    /// Cards without visible text show the placeholder instead of content
    /// and are not exportable.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
