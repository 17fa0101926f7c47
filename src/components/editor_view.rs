//! Editor View Component
//!
//! Single-card editing surface: the live preview bound to the shared card
//! state plus the export trigger. The trigger is gated on non-empty trimmed
//! text and on no export being in flight for this card.

use cardforge_render::{AspectRatio, Card, Design};
use dioxus::prelude::*;

use crate::components::{DownloadIcon, PreviewCard};
use crate::context::use_rasterizer;
use crate::export::{run_export, ExportRequest, SurfaceHandle};

/// Export button label for the given in-flight state.
pub fn export_label(is_exporting: bool) -> &'static str {
    if is_exporting {
        "Exporting..."
    } else {
        "Download PNG"
    }
}

#[component]
pub fn EditorView(
    text: Signal<String>,
    design: Signal<Design>,
    aspect: Signal<AspectRatio>,
) -> Element {
    let rasterizer = use_rasterizer();
    let mut is_exporting = use_signal(|| false);
    let surface: SurfaceHandle = use_signal(|| None);

    let can_export = !text().trim().is_empty() && !is_exporting();

    let on_export = move |_| {
        let Some(request) = ExportRequest::new(Card::new(text(), design(), aspect())) else {
            return;
        };
        if is_exporting() {
            return;
        }
        is_exporting.set(true);

        let rasterizer = rasterizer.clone();
        spawn(async move {
            run_export(rasterizer, surface(), request).await;
            // run_export never propagates errors, so this always runs
            is_exporting.set(false);
        });
    };

    rsx! {
        PreviewCard {
            text: text(),
            design: design(),
            aspect: aspect(),
            surface,
        }

        button {
            id: "download-btn",
            class: "download-btn fade-in",
            disabled: !can_export,
            onclick: on_export,
            DownloadIcon {}
            {export_label(is_exporting())}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_label_tracks_in_flight_state() {
        assert_eq!(export_label(false), "Download PNG");
        assert_eq!(export_label(true), "Exporting...");
    }
}
