//! Demo Grid Component
//!
//! Fifteen sample cards sharing the current design and aspect selection,
//! each with its own surface handle and its own in-flight flag, so exports
//! of different cards never block one another.

use cardforge_render::{AspectRatio, Card, Design};
use dioxus::prelude::*;

use crate::components::{DownloadIcon, PreviewCard};
use crate::context::use_rasterizer;
use crate::export::{run_export, ExportRequest, SurfaceHandle};

/// Fixed sample texts shown in the demo grid.
pub const SAMPLE_TEXTS: [&str; 15] = [
    "Innovate", "Create", "Design", "Future", "Tech",
    "Code", "Build", "Dream", "Explore", "Inspire",
    "Vision", "Logic", "Magic", "Clean", "Modern",
];

#[component]
pub fn DemoGrid(design: Design, aspect: AspectRatio) -> Element {
    rsx! {
        div { class: "demo-grid fade-in",
            for sample in SAMPLE_TEXTS {
                PreviewItem {
                    key: "{sample}",
                    text: sample,
                    design,
                    aspect,
                }
            }
        }
    }
}

/// One independently exportable grid card.
#[component]
pub fn PreviewItem(text: String, design: Design, aspect: AspectRatio) -> Element {
    let rasterizer = use_rasterizer();
    let mut is_exporting = use_signal(|| false);
    let surface: SurfaceHandle = use_signal(|| None);

    let card_text = text.clone();
    let on_export = move |_| {
        let Some(request) = ExportRequest::new(Card::new(card_text.clone(), design, aspect))
        else {
            return;
        };
        if is_exporting() {
            return;
        }
        is_exporting.set(true);

        let rasterizer = rasterizer.clone();
        spawn(async move {
            run_export(rasterizer, surface(), request).await;
            is_exporting.set(false);
        });
    };

    rsx! {
        div { class: "demo-item fade-in",
            PreviewCard {
                text,
                design,
                aspect,
                surface,
            }
            button {
                class: "demo-download-btn",
                title: "Download",
                disabled: is_exporting(),
                onclick: on_export,
                DownloadIcon {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fifteen_distinct_samples() {
        assert_eq!(SAMPLE_TEXTS.len(), 15);
        let unique: HashSet<&str> = SAMPLE_TEXTS.iter().copied().collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_every_sample_is_exportable() {
        for sample in SAMPLE_TEXTS {
            let request = ExportRequest::new(Card::new(
                sample,
                Design::Glass,
                AspectRatio::Standard,
            ));
            assert!(request.is_some(), "{sample}");
        }
    }
}
