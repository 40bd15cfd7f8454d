#![allow(dead_code)]

use once_cell::sync::Lazy;
use pixai_core::{MemoryStore, Modals, UserStore};
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
});

pub fn setup_tracing() {
    Lazy::force(&TRACING_INIT);
}

/// A freshly loaded page: initialized store, both dialogs closed.
pub fn fresh_page() -> (UserStore<MemoryStore>, Modals) {
    setup_tracing();
    let store = UserStore::new(MemoryStore::new());
    store.initialize().expect("initialize store");
    (store, Modals::default())
}
