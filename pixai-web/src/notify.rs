use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use pixai_core::{Timings, ToastQueue};
use tracing::debug;

use crate::timer;

/// Raises toasts; each one schedules its own exit and removal.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Signal<ToastQueue>,
    display_ms: u32,
    exit_ms: u32,
}

impl Notifier {
    pub fn new(toasts: Signal<ToastQueue>, timings: &Timings) -> Self {
        Self {
            toasts,
            display_ms: timings.toast_display_ms,
            exit_ms: timings.toast_exit_ms,
        }
    }

    pub fn show(self, message: impl Into<String>) {
        let mut toasts = self.toasts;
        let message = message.into();
        debug!(%message, "toast");
        let id = toasts.write().push(message);

        spawn_forever(async move {
            timer::after(self.display_ms).await;
            toasts.write().begin_exit(id);
            timer::after(self.exit_ms).await;
            toasts.write().remove(id);
        });
    }
}
