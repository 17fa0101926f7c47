//! Export pipeline: capture the card surface, rasterize, save the PNG.
//!
//! One export may be in flight per card; the per-card `is_exporting` signal
//! is owned by the component that triggers the export and is cleared on
//! every exit path. Failures are logged and swallowed - the card simply
//! returns to its idle state with no file produced.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use cardforge_render::{export_file_name, Card, SurfaceSize};
use dioxus::html::MountedData;
use dioxus::prelude::*;

use crate::context::SharedRasterizer;

/// Non-owning reference to a card's mounted preview surface.
///
/// Set by the PreviewCard's `onmounted` handler; `None` until the surface
/// exists. The pipeline borrows it read-only for the duration of one call.
pub type SurfaceHandle = Signal<Option<Rc<MountedData>>>;

/// Ephemeral export job, built at click time and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub file_name: String,
    pub card: Card,
}

impl ExportRequest {
    /// Build a request for the card, or `None` when its trimmed text is
    /// empty - empty cards are never rasterized or saved.
    pub fn new(card: Card) -> Option<Self> {
        let file_name = export_file_name(&card.text)?;
        Some(Self { file_name, card })
    }
}

/// Run one export end to end: measure the mounted surface, rasterize the
/// card at 3x its layout size on a blocking worker, write the PNG.
///
/// No-op when the surface handle is unset or the surface can no longer be
/// measured (unmounted). Never propagates errors.
pub async fn run_export(
    rasterizer: SharedRasterizer,
    surface: Option<Rc<MountedData>>,
    request: ExportRequest,
) {
    let Some(node) = surface else {
        tracing::warn!(file = %request.file_name, "export skipped: surface not mounted");
        return;
    };

    // Live layout size of exactly this card's surface
    let size = match node.get_client_rect().await {
        Ok(rect) => SurfaceSize::new(
            rect.size.width.round() as u32,
            rect.size.height.round() as u32,
        ),
        Err(e) => {
            tracing::warn!(file = %request.file_name, "export skipped: surface unmounted: {e}");
            return;
        }
    };

    let card = request.card.clone();
    let rendered =
        tokio::task::spawn_blocking(move || rasterizer.render_png(&card, size)).await;

    match rendered {
        Ok(Ok(png)) => match save_download(&crate::context::get_out_dir(), &request.file_name, &png) {
            Ok(path) => {
                tracing::info!(file = %request.file_name, path = %path.display(), "exported card");
            }
            Err(e) => tracing::error!(file = %request.file_name, "export failed: {e}"),
        },
        Ok(Err(e)) => tracing::error!(file = %request.file_name, "export failed: {e}"),
        Err(e) => tracing::error!(file = %request.file_name, "export worker failed: {e}"),
    }
}

/// Save boundary: write the PNG bytes under the derived filename.
///
/// The desktop equivalent of a browser download - straight into the export
/// directory, no dialog.
pub fn save_download(dir: &Path, file_name: &str, png: &[u8]) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, png)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardforge_render::{AspectRatio, Design};

    fn card(text: &str) -> Card {
        Card::new(text, Design::Glass, AspectRatio::Standard)
    }

    #[test]
    fn test_request_derives_filename() {
        let request = ExportRequest::new(card("Hello World")).expect("exportable");
        assert_eq!(request.file_name, "Hello_World.png");
    }

    #[test]
    fn test_blank_text_yields_no_request() {
        assert_eq!(ExportRequest::new(card("")), None);
        assert_eq!(ExportRequest::new(card("   \t ")), None);
    }

    #[test]
    fn test_save_download_writes_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("exports");
        let path = save_download(&nested, "Hello_World.png", b"png-bytes").expect("saved");
        assert_eq!(path, nested.join("Hello_World.png"));
        assert_eq!(std::fs::read(path).expect("readable"), b"png-bytes");
    }
}
