use dioxus::prelude::*;
use pixai_core::generation::{image_url, prompt_seed};
use pixai_core::{AppConfig, ArtStyle};
use tracing::debug;

const SAMPLES: [(&str, ArtStyle); 6] = [
    ("Neon alley in the rain", ArtStyle::Cyberpunk),
    ("Fox sleeping under autumn leaves", ArtStyle::Watercolor),
    ("Lighthouse on a stormy cliff", ArtStyle::OilPainting),
    ("Girl with a paper umbrella", ArtStyle::Anime),
    ("Floating islands at dawn", ArtStyle::DigitalArt),
    ("Old fisherman mending nets", ArtStyle::Realistic),
];

#[component]
pub fn Gallery() -> Element {
    let config = use_context::<AppConfig>();
    use_hook(|| debug!(count = SAMPLES.len(), "gallery loaded with sample images"));

    rsx! {
        section { id: "gallery", class: "gallery",
            h2 { class: "section-title", "Community Gallery" }
            div { class: "gallery-grid",
                for (prompt, style) in SAMPLES {
                    div { class: "gallery-item",
                        img {
                            src: "{image_url(&config, prompt_seed(prompt), style)}",
                            alt: "{prompt}",
                            loading: "lazy",
                        }
                        div { class: "gallery-caption",
                            p { "{prompt}" }
                            span { "{style.label()}" }
                        }
                    }
                }
            }
        }
    }
}
