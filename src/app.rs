//! Root application shell.
//!
//! Owns the card state (text, design, aspect ratio) and the editor/demo
//! mode flag, and swaps between the single-card editor and the demo grid.

use std::sync::Arc;

use cardforge_render::{AspectRatio, Design, Rasterizer};
use dioxus::prelude::*;

use crate::components::{CardControls, DemoGrid, EditorView};
use crate::context::SharedRasterizer;
use crate::theme::GLOBAL_STYLES;

/// Top-level view mode. Session-lived, no terminal state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Editor,
    Demo,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Editor => Mode::Demo,
            Mode::Demo => Mode::Editor,
        }
    }

    /// Label of the mode toggle button while in this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Editor => "View Demo Grid",
            Mode::Demo => "Editor Mode",
        }
    }
}

/// Root application component.
///
/// Provides global styles and the shared rasterizer context.
#[component]
pub fn App() -> Element {
    let text = use_signal(String::new);
    let design = use_signal(|| crate::get_init_design().unwrap_or(Design::Glass));
    let aspect = use_signal(|| crate::get_init_aspect().unwrap_or(AspectRatio::Standard));
    let mut mode = use_signal(|| Mode::Editor);

    // Font database loads once; every export borrows this instance
    use_context_provider::<SharedRasterizer>(|| Arc::new(Rasterizer::new()));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-container",
            header { class: "app-header fade-in",
                h1 { class: "app-title", "Cardforge" }
                p { class: "app-subtitle",
                    "Type your text, preview it in style, and download as PNG"
                }
                button {
                    class: "mode-toggle-btn",
                    onclick: move |_| mode.set(mode().toggled()),
                    "{mode().toggle_label()}"
                }
            }

            // Controls stay mounted in both modes; the grid keeps following
            // the current design and aspect selection
            CardControls {
                text,
                design,
                aspect,
                text_disabled: mode() == Mode::Demo,
            }

            match mode() {
                Mode::Editor => rsx! {
                    EditorView { text, design, aspect }
                },
                Mode::Demo => rsx! {
                    DemoGrid { design: design(), aspect: aspect() }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Mode::Editor.toggled(), Mode::Demo);
        assert_eq!(Mode::Editor.toggled().toggled(), Mode::Editor);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Mode::Editor.toggle_label(), "View Demo Grid");
        assert_eq!(Mode::Demo.toggle_label(), "Editor Mode");
    }
}
