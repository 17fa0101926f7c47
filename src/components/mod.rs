//! UI components for Cardforge.

mod controls;
mod demo_grid;
mod editor_view;
mod preview_card;

pub use controls::CardControls;
pub use demo_grid::{DemoGrid, SAMPLE_TEXTS};
pub use editor_view::EditorView;
pub use preview_card::{DownloadIcon, PreviewCard};
