//! Rasterizer context provider for Cardforge.
//!
//! The rasterizer loads the system font database once at startup; every
//! card's export borrows the same instance via context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Arc::new(Rasterizer::new()) as SharedRasterizer);
//!
//! // In child components
//! let rasterizer = use_rasterizer();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use cardforge_render::Rasterizer;
use dioxus::prelude::*;

/// Shared rasterizer type for context.
///
/// Immutable once built, so a plain `Arc` is enough; blocking render work
/// clones the handle onto a worker thread.
pub type SharedRasterizer = Arc<Rasterizer>;

/// Get the directory exported PNGs are written into.
/// Uses the global out dir set from command line args.
pub fn get_out_dir() -> PathBuf {
    crate::get_out_dir()
}

/// Hook to access the shared rasterizer from context.
pub fn use_rasterizer() -> SharedRasterizer {
    use_context::<SharedRasterizer>()
}
