//! Preview Card Component
//!
//! Pure function of (text, design, aspect): renders the skin's layer
//! structure and publishes its root element through the surface handle so
//! the export pipeline can measure exactly this subtree.

use cardforge_render::{AspectRatio, Design, PLACEHOLDER_TEXT};
use dioxus::prelude::*;

use crate::export::SurfaceHandle;

/// One rendered card surface.
///
/// Glass: three decorative orbs behind a frosted overlay panel.
/// Neon-glow: a single layer with two extra glow orbs.
/// Every other skin: a single styled layer.
/// Content is the text plus an accent element, or the placeholder while
/// the trimmed text is empty.
#[component]
pub fn PreviewCard(
    text: String,
    design: Design,
    aspect: AspectRatio,
    /// Written on mount; read by the export pipeline
    mut surface: SurfaceHandle,
) -> Element {
    let has_text = !text.trim().is_empty();

    // Fixed box for every ratio except auto, where size follows content
    let aspect_style = match aspect.ratio() {
        Some((w, h)) => format!("aspect-ratio: {w} / {h};"),
        None => String::new(),
    };

    rsx! {
        div { class: "preview-card-wrapper fade-in",
            div {
                class: "preview-card",
                style: "{aspect_style}",
                onmounted: move |ev| surface.set(Some(ev.data())),

                if design == Design::Glass {
                    div { class: "orb orb-purple" }
                    div { class: "orb orb-pink" }
                    div { class: "orb orb-cyan" }

                    div { class: "glass-overlay",
                        div { class: "glass-frost" }
                        div { class: "glass-content",
                            if has_text {
                                div { class: "glass-text", "{text}" }
                                div { class: "glass-accent-line" }
                            } else {
                                span { class: "placeholder-text", {PLACEHOLDER_TEXT} }
                            }
                        }
                    }
                } else {
                    div { class: "design-layer design-{design.token()}",
                        if design == Design::NeonGlow {
                            div { class: "neon-orb neon-cyan-orb" }
                            div { class: "neon-orb neon-pink-orb" }
                        }
                        div { class: "design-content",
                            if has_text {
                                div { class: "design-text text-{design.token()}", "{text}" }
                                div { class: "design-accent accent-{design.token()}" }
                            } else {
                                span { class: "placeholder-text", {PLACEHOLDER_TEXT} }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Download arrow icon used on both export buttons.
#[component]
pub fn DownloadIcon() -> Element {
    rsx! {
        svg {
            class: "download-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", y1: "15", x2: "12", y2: "3" }
        }
    }
}
