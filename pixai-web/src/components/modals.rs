use dioxus::prelude::*;
use pixai_core::forms::{complete_login, complete_signup, submit_login, submit_signup};
use pixai_core::{AppConfig, ModalId, Modals, SessionUser, UserStore};
use tracing::warn;

use crate::components::RippleButton;
use crate::notify::Notifier;
use crate::storage::BrowserStore;
use crate::timer;

/// Backdrop plus dialog card. A click that lands on the backdrop itself
/// closes the dialog; clicks inside the card stop there.
#[component]
fn ModalShell(id: ModalId, #[props(into)] title: String, children: Element) -> Element {
    let mut modals = use_context::<Signal<Modals>>();
    let display = if modals.read().is_open(id) { "flex" } else { "none" };

    rsx! {
        div {
            class: "modal",
            id: "{id}",
            style: "display: {display};",
            onclick: move |_| modals.write().close(id),
            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                span { class: "close", onclick: move |_| modals.write().close(id), "×" }
                h2 { "{title}" }
                {children}
            }
        }
    }
}

#[component]
fn InlineMessage(id: ModalId) -> Element {
    let modals = use_context::<Signal<Modals>>();
    let message = modals.read().message(id).cloned();

    rsx! {
        if let Some(message) = message {
            div { class: "{message.class()}", style: "display: block;", "{message.text}" }
        }
    }
}

#[component]
pub fn SignupModal() -> Element {
    let mut modals = use_context::<Signal<Modals>>();
    let mut session = use_context::<Signal<Option<SessionUser>>>();
    let store = use_context::<UserStore<BrowserStore>>();
    let notifier = use_context::<Notifier>();
    let delay = use_context::<AppConfig>().timings.signup_close_ms;

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let accepted = submit_signup(
            &store,
            &mut modals.write(),
            &name.read(),
            &email.read(),
            &password.read(),
        );
        let Some(user) = accepted else {
            return;
        };

        name.set(String::new());
        email.set(String::new());
        password.set(String::new());

        let store = store.clone();
        spawn(async move {
            timer::after(delay).await;
            let signed_in = complete_signup(&store, &mut modals.write(), &user);
            match signed_in {
                Ok(welcome) => {
                    session.set(Some(user));
                    notifier.show(welcome);
                }
                Err(err) => {
                    warn!(error = %err, "auto-login after signup failed");
                    notifier.show(format!("Could not sign you in: {err}"));
                }
            }
        });
    };

    rsx! {
        ModalShell { id: ModalId::Signup, title: "Create your account",
            form { id: "signupForm", onsubmit: on_submit,
                input {
                    id: "signupName",
                    r#type: "text",
                    placeholder: "Full name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    id: "signupEmail",
                    r#type: "email",
                    placeholder: "Email address",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    id: "signupPassword",
                    r#type: "password",
                    placeholder: "Password (min. 6 characters)",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                RippleButton { class: "btn btn-primary btn-block", kind: "submit", "Sign Up" }
                InlineMessage { id: ModalId::Signup }
            }
            p { class: "modal-switch",
                "Already have an account? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let mut modals = modals.write();
                        modals.close(ModalId::Signup);
                        modals.open(ModalId::Login);
                    },
                    "Log in"
                }
            }
        }
    }
}

#[component]
pub fn LoginModal() -> Element {
    let mut modals = use_context::<Signal<Modals>>();
    let mut session = use_context::<Signal<Option<SessionUser>>>();
    let store = use_context::<UserStore<BrowserStore>>();
    let notifier = use_context::<Notifier>();
    let delay = use_context::<AppConfig>().timings.login_close_ms;

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let accepted = submit_login(&store, &mut modals.write(), &email.read(), &password.read());
        let Some(user) = accepted else {
            return;
        };

        session.set(Some(user.clone()));
        spawn(async move {
            timer::after(delay).await;
            let greeting = complete_login(&mut modals.write(), &user);
            notifier.show(greeting);
        });
    };

    rsx! {
        ModalShell { id: ModalId::Login, title: "Welcome back",
            form { id: "loginForm", onsubmit: on_submit,
                input {
                    id: "loginEmail",
                    r#type: "email",
                    placeholder: "Email address",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    id: "loginPassword",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                RippleButton { class: "btn btn-primary btn-block", kind: "submit", "Log In" }
                InlineMessage { id: ModalId::Login }
            }
            p { class: "modal-switch",
                "New to PixAI? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let mut modals = modals.write();
                        modals.close(ModalId::Login);
                        modals.open(ModalId::Signup);
                    },
                    "Create an account"
                }
            }
        }
    }
}
