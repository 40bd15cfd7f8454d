use std::rc::Rc;

use dioxus::prelude::*;
use pixai_core::AppConfig;
use pixai_core::ripple::{Bounds, Ripple};

use crate::timer;

/// `.btn` with the click ripple overlay.
#[component]
pub fn RippleButton(
    #[props(into, default)] class: String,
    #[props(default = "button")] kind: &'static str,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let ripple_ms = use_context::<AppConfig>().timings.ripple_ms;
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let mut ripples = use_signal(Vec::<(u64, Ripple)>::new);
    let mut next_id = use_signal(|| 0u64);

    let on_click = move |evt: MouseEvent| {
        if disabled {
            return;
        }

        let point = evt.client_coordinates();
        if let Some(element) = mounted.read().clone() {
            spawn(async move {
                let Ok(rect) = element.get_client_rect().await else {
                    return;
                };
                let bounds = Bounds {
                    left: rect.origin.x,
                    top: rect.origin.y,
                    width: rect.size.width,
                    height: rect.size.height,
                };
                let id = next_id.with_mut(|n| {
                    *n += 1;
                    *n
                });
                ripples
                    .write()
                    .push((id, Ripple::at_click(bounds, point.x, point.y)));
                timer::after(ripple_ms).await;
                ripples.write().retain(|(rid, _)| *rid != id);
            });
        }

        if let Some(handler) = &onclick {
            handler.call(evt);
        }
    };

    let active: Vec<(u64, Ripple)> = ripples.read().clone();

    rsx! {
        button {
            class: "{class}",
            r#type: kind,
            disabled: disabled,
            onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
            onclick: on_click,
            {children}
            for (id, ripple) in active {
                span { key: "{id}", class: "ripple", style: "{ripple.style()}" }
            }
        }
    }
}
