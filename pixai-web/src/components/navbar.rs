use dioxus::prelude::*;
use pixai_core::{AppConfig, ModalId, Modals, SessionUser, UserStore};
use tracing::warn;

use crate::Route;
use crate::components::{LoginModal, RippleButton, SignupModal, ToastStack};
use crate::dom;
use crate::notify::Notifier;
use crate::storage::BrowserStore;
use crate::timer;

#[component]
pub fn Navbar() -> Element {
    let session = use_context::<Signal<Option<SessionUser>>>();
    let mut modals = use_context::<Signal<Modals>>();
    let store = use_context::<UserStore<BrowserStore>>();
    let notifier = use_context::<Notifier>();
    let reload_delay = use_context::<AppConfig>().timings.logout_reload_ms;

    // the page reload resets every signal, so the header is left as is
    let on_logout = move |_: MouseEvent| {
        store.logout();
        notifier.show("Logged out successfully");
        spawn(async move {
            timer::after(reload_delay).await;
            if let Err(err) = dom::reload() {
                warn!(error = %err, "page reload failed");
            }
        });
    };

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                Link { to: Route::Home {}, class: "logo",
                    i { class: "fas fa-palette" }
                    " PixAI"
                }
                div { class: "nav-links",
                    a { onclick: move |_| scroll_to("generator"), "Create" }
                    a { onclick: move |_| scroll_to("gallery"), "Gallery" }
                }
                div { class: "auth-buttons",
                    match session.read().as_ref() {
                        Some(user) => rsx! {
                            span { class: "welcome", "Welcome, {user.name}" }
                            RippleButton { class: "btn btn-outline", onclick: on_logout, "Log Out" }
                        },
                        None => rsx! {
                            RippleButton {
                                class: "btn btn-outline",
                                onclick: move |_: MouseEvent| modals.write().open(ModalId::Login),
                                "Log In"
                            }
                            RippleButton {
                                class: "btn btn-primary",
                                onclick: move |_: MouseEvent| modals.write().open(ModalId::Signup),
                                "Sign Up"
                            }
                        },
                    }
                }
            }
        }
        Outlet::<Route> {}
        SignupModal {}
        LoginModal {}
        ToastStack {}
    }
}

pub fn scroll_to(section: &str) {
    if let Err(err) = dom::scroll_to_section(section) {
        warn!(section, error = %err, "smooth scroll failed");
    }
}
