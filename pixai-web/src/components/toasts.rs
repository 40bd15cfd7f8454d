use dioxus::prelude::*;
use pixai_core::{Toast, ToastQueue};

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let visible: Vec<Toast> = toasts.read().iter().cloned().collect();

    rsx! {
        for toast in visible {
            div {
                key: "{toast.id}",
                class: "toast",
                style: "animation: {toast.animation()};",
                "{toast.message}"
            }
        }
    }
}
