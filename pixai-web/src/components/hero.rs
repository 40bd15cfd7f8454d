use dioxus::prelude::*;

use crate::components::navbar::scroll_to;
use crate::components::{Gallery, Generator, RippleButton};

#[component]
pub fn Hero() -> Element {
    rsx! {
        header { id: "hero", class: "hero",
            h1 { "Turn words into ", span { class: "gradient-text", "stunning art" } }
            p { class: "hero-subtitle",
                "Describe anything you can imagine and PixAI paints it in seconds."
            }
            div { class: "hero-buttons",
                RippleButton {
                    class: "btn btn-primary btn-large",
                    onclick: move |_: MouseEvent| scroll_to("generator"),
                    i { class: "fas fa-wand-magic-sparkles" }
                    " Start Creating"
                }
                RippleButton {
                    class: "btn btn-outline btn-large",
                    onclick: move |_: MouseEvent| scroll_to("gallery"),
                    "View Gallery"
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Generator {}
        Gallery {}
    }
}
