mod gallery;
mod generator;
mod hero;
mod modals;
pub mod navbar;
mod ripple_button;
mod toasts;

pub use gallery::Gallery;
pub use generator::Generator;
pub use hero::Home;
pub use modals::{LoginModal, SignupModal};
pub use navbar::Navbar;
pub use ripple_button::RippleButton;
pub use toasts::ToastStack;
