use chrono::Utc;
use dioxus::prelude::*;
use pixai_core::{AppConfig, ArtStyle, GenerationFlow, ModalId, Modals, Phase, UserStore};
use tracing::{debug, warn};

use crate::components::RippleButton;
use crate::dom;
use crate::notify::Notifier;
use crate::storage::BrowserStore;
use crate::timer;

#[component]
pub fn Generator() -> Element {
    let mut flow = use_context::<Signal<GenerationFlow>>();
    let mut modals = use_context::<Signal<Modals>>();
    let store = use_context::<UserStore<BrowserStore>>();
    let notifier = use_context::<Notifier>();
    let config = use_context::<AppConfig>();

    let mut prompt = use_signal(String::new);
    let mut style = use_signal(ArtStyle::default);

    let on_generate = move |_: MouseEvent| {
        let started = flow.write().begin(&prompt.read(), *style.read());
        let pending = match started {
            Ok(pending) => pending,
            Err(err) => {
                notifier.show(err.to_string());
                return;
            }
        };

        let config = config.clone();
        spawn(async move {
            timer::after(config.timings.generation_ms).await;
            flow.write().complete(pending, &config);
            notifier.show("🎨 Image generated successfully!");
        });
    };

    let on_download = move |_: MouseEvent| {
        let request = flow.read().download(Utc::now());
        match request {
            Ok(request) => match dom::start_download(&request) {
                Ok(()) => notifier.show("📥 Image download started!"),
                Err(err) => warn!(error = %err, "download link failed"),
            },
            Err(err) => notifier.show(err.to_string()),
        }
    };

    let on_save = move |_: MouseEvent| {
        let session = store.current_user().unwrap_or_else(|err| {
            warn!(error = %err, "session unreadable");
            None
        });
        let saved = flow.read().save(session.as_ref());
        match saved {
            Ok(()) => notifier.show("💾 Image saved to your gallery!"),
            Err(err) => {
                notifier.show(err.to_string());
                modals.write().open(ModalId::Login);
            }
        }
    };

    let on_share = move |_: MouseEvent| {
        let url = match dom::page_url() {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "page url unavailable");
                return;
            }
        };
        let payload = flow.read().share_payload(&url);

        if dom::can_share() {
            spawn(async move {
                if let Err(err) = dom::share(&payload).await {
                    debug!(error = %err, "share dismissed");
                }
            });
        } else {
            notifier.show("📤 Share URL copied to clipboard!");
            spawn(async move {
                if let Err(err) = dom::copy_to_clipboard(&payload.url).await {
                    debug!(error = %err, "clipboard write failed");
                }
            });
        }
    };

    let phase = flow.read().phase().clone();
    let result = flow.read().image().cloned();
    let generating = flow.read().is_generating();
    let actions_display = if flow.read().actions_visible() { "flex" } else { "none" };

    rsx! {
        section { id: "generator", class: "generator",
            h2 { class: "section-title", "Create Your Masterpiece" }
            div { class: "generator-container",
                div { class: "prompt-panel",
                    label { r#for: "promptText", "Describe your image" }
                    textarea {
                        id: "promptText",
                        placeholder: "A serene lake at sunset surrounded by mountains...",
                        value: "{prompt}",
                        oninput: move |evt| prompt.set(evt.value()),
                    }
                    label { r#for: "artStyle", "Art style" }
                    select {
                        id: "artStyle",
                        value: "{style}",
                        onchange: move |evt| style.set(ArtStyle::from_id(&evt.value()).unwrap_or_default()),
                        for choice in ArtStyle::ALL {
                            option { value: "{choice}", "{choice.label()}" }
                        }
                    }
                    RippleButton {
                        class: "btn btn-primary btn-generate",
                        disabled: generating,
                        onclick: on_generate,
                        if generating {
                            i { class: "fas fa-spinner fa-spin" }
                            " Generating..."
                        } else {
                            i { class: "fas fa-magic" }
                            " Generate Image"
                        }
                    }
                }
                div { class: "result-panel",
                    div { id: "imageResult", class: "image-result",
                        match (phase, result) {
                            (Phase::Generating { prompt: pending_prompt, style: pending_style }, _) => rsx! {
                                div { class: "spinner" }
                                p { style: "color: #cbd5e1;", "Creating your \"{pending_prompt}\" in {pending_style} style..." }
                                p { style: "color: #94a3b8; font-size: 14px;", "Powered by AI • This may take a few seconds" }
                            },
                            (Phase::Displaying, Some(image)) => rsx! {
                                img { src: "{image.image_url}", alt: "Generated: {image.prompt}", class: "generated-image" }
                                div { style: "margin-top: 16px; text-align: center;",
                                    p { style: "color: #cbd5e1; margin-bottom: 8px;", strong { "{image.prompt}" } }
                                    p { style: "color: #94a3b8; font-size: 14px;", "Style: {image.style} • AI Generated" }
                                }
                            },
                            _ => rsx! {
                                div { class: "placeholder",
                                    i { class: "fas fa-image" }
                                    p { "Your generated image will appear here" }
                                }
                            },
                        }
                    }
                    div { id: "imageActions", class: "image-actions", style: "display: {actions_display};",
                        RippleButton { class: "btn btn-outline", onclick: on_download,
                            i { class: "fas fa-download" }
                            " Download"
                        }
                        RippleButton { class: "btn btn-outline", onclick: on_save,
                            i { class: "fas fa-heart" }
                            " Save"
                        }
                        RippleButton { class: "btn btn-outline", onclick: on_share,
                            i { class: "fas fa-share-alt" }
                            " Share"
                        }
                    }
                }
            }
        }
    }
}
