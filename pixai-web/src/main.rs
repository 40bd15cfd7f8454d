use dioxus::prelude::*;
use pixai_core::{AppConfig, GenerationFlow, Modals, ToastQueue, UserStore};
use tracing::{info, warn};

use crate::components::{Home, Navbar};
use crate::notify::Notifier;
use crate::storage::BrowserStore;

mod components;
mod dom;
mod error;
mod logging;
mod notify;
mod storage;
mod timer;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::init_logging(&config);
    if let Some(err) = config_error {
        warn!(error = %err, "invalid build configuration, using defaults");
    }
    info!(image_service = %config.image_service_url, "starting PixAI");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_context_provider(|| UserStore::new(BrowserStore));

    let restored = use_hook(|| {
        if let Err(err) = store.initialize() {
            warn!(error = %err, "could not seed users list");
        }
        store.current_user().unwrap_or_else(|err| {
            warn!(error = %err, "stored session unreadable");
            None
        })
    });

    use_context_provider(|| Signal::new(restored));
    use_context_provider(|| Signal::new(Modals::default()));
    use_context_provider(|| Signal::new(GenerationFlow::default()));
    let toasts = use_context_provider(|| Signal::new(ToastQueue::default()));
    use_context_provider(|| Notifier::new(toasts, &config.timings));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        Router::<Route> {}
    }
}
