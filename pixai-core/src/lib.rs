//! Page logic for the PixAI demo: a local-storage account store, the
//! signup/login dialogs, toast notifications and the placeholder image
//! generator. Nothing here touches the DOM.

pub mod auth;
pub mod config;
pub mod error;
pub mod feedback;
pub mod forms;
pub mod generation;
pub mod modal;
pub mod ripple;
pub mod storage;
pub mod user;

pub use auth::UserStore;
pub use config::{AppConfig, Timings};
pub use error::{AuthError, GenerationError, StoreError};
pub use feedback::{FormMessage, MessageKind, Toast, ToastPhase, ToastQueue};
pub use generation::{ArtStyle, GeneratedImage, GenerationFlow, Phase};
pub use modal::{ModalId, Modals};
pub use storage::{KeyValueStore, MemoryStore};
pub use user::{SessionUser, User};
