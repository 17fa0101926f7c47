//! Card Controls Component
//!
//! Text input plus the design and aspect-ratio selectors, live-bound to the
//! shared card state. Stays mounted in both modes; the text input is only
//! disabled while the demo grid is showing.

use cardforge_render::{AspectRatio, Design};
use dioxus::prelude::*;

#[component]
pub fn CardControls(
    mut text: Signal<String>,
    mut design: Signal<Design>,
    mut aspect: Signal<AspectRatio>,
    #[props(default = false)] text_disabled: bool,
) -> Element {
    rsx! {
        div { class: "input-section fade-in",
            div { class: "input-row",
                div { class: "input-wrapper",
                    input {
                        id: "text-input",
                        class: "text-input",
                        r#type: "text",
                        placeholder: "Enter your text here...",
                        value: "{text}",
                        disabled: text_disabled,
                        autofocus: true,
                        oninput: move |ev| text.set(ev.value()),
                    }
                }

                div { class: "select-wrapper",
                    select {
                        id: "design-select",
                        class: "style-select",
                        value: "{design().token()}",
                        onchange: move |ev| {
                            if let Some(picked) = Design::from_token(&ev.value()) {
                                design.set(picked);
                            }
                        },
                        for option in Design::ALL {
                            option {
                                value: "{option.token()}",
                                selected: option == design(),
                                "{option.label()}"
                            }
                        }
                    }
                    SelectChevron {}
                }

                div { class: "select-wrapper",
                    select {
                        id: "aspect-ratio-select",
                        class: "style-select",
                        value: "{aspect().token()}",
                        onchange: move |ev| {
                            if let Some(picked) = AspectRatio::from_token(&ev.value()) {
                                aspect.set(picked);
                            }
                        },
                        for option in AspectRatio::ALL {
                            option {
                                value: "{option.token()}",
                                selected: option == aspect(),
                                "{option.label()}"
                            }
                        }
                    }
                    SelectChevron {}
                }
            }
        }
    }
}

#[component]
fn SelectChevron() -> Element {
    rsx! {
        svg {
            class: "select-chevron",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}
