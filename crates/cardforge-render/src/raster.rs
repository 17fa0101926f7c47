//! PNG rasterization of composed card scenes.
//!
//! The scene is parsed with usvg, rendered into a tiny-skia pixmap at the
//! pixel-density multiplier, unpremultiplied, and encoded as a full-quality
//! PNG via the `image` crate.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Instant;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};

use crate::error::RenderError;
use crate::{skin, AspectRatio, Card};

/// Output pixel dimensions are this multiple of the surface layout size.
pub const PIXEL_RATIO: u32 = 3;

/// Layout size of the surface being captured, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Base layout width used when no live surface measurement exists.
    pub const BASE_WIDTH: u32 = 640;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface for a catalog ratio at the base width.
    ///
    /// `Auto` surfaces take their size from content; headless callers get
    /// the 4:3 default.
    pub fn for_aspect(aspect: AspectRatio) -> Self {
        let (rw, rh) = aspect
            .ratio()
            .unwrap_or_else(|| AspectRatio::Standard.ratio().expect("fixed ratio"));
        let width = Self::BASE_WIDTH;
        let height = (width as f32 * rh / rw).round() as u32;
        Self { width, height }
    }
}

/// Shared scene rasterizer.
///
/// Loads the system font database once; cheap to clone behind an `Arc` and
/// safe to use from blocking worker threads.
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Render one card to PNG bytes at [`PIXEL_RATIO`] times the surface
    /// layout dimensions.
    pub fn render_png(&self, card: &Card, surface: SurfaceSize) -> Result<Vec<u8>, RenderError> {
        let started = Instant::now();

        let scene = skin::compose(card, surface);
        let mut options = Options::default();
        options.fontdb = self.fontdb.clone();
        let tree = Tree::from_str(&scene, &options)?;

        let width = surface.width * PIXEL_RATIO;
        let height = surface.height * PIXEL_RATIO;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
        let scale = PIXEL_RATIO as f32;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(pixmap_to_rgba(&pixmap))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        tracing::debug!(
            design = %card.design,
            width,
            height,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rendered card scene"
        );
        Ok(png)
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert the premultiplied pixmap into a straight-alpha RGBA image.
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (x, y, out) in img.enumerate_pixels_mut() {
        let px = pixmap.pixel(x, y).expect("pixel in bounds").demultiply();
        *out = Rgba([px.red(), px.green(), px.blue(), px.alpha()]);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Design;

    #[test]
    fn test_for_aspect_fixed_ratios() {
        let wide = SurfaceSize::for_aspect(AspectRatio::Widescreen);
        assert_eq!(wide, SurfaceSize::new(640, 360));
        let square = SurfaceSize::for_aspect(AspectRatio::Square);
        assert_eq!(square, SurfaceSize::new(640, 640));
    }

    #[test]
    fn test_for_aspect_auto_falls_back_to_standard() {
        assert_eq!(
            SurfaceSize::for_aspect(AspectRatio::Auto),
            SurfaceSize::for_aspect(AspectRatio::Standard)
        );
    }

    #[test]
    fn test_zero_surface_is_an_error() {
        let rasterizer = Rasterizer::new();
        let card = Card::new("Hi", Design::SolidBrand, AspectRatio::Standard);
        let result = rasterizer.render_png(&card, SurfaceSize::new(0, 120));
        assert!(result.is_err());
    }
}
