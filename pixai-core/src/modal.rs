use derive_more::Display;

use crate::feedback::FormMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ModalId {
    #[display("signupModal")]
    Signup,
    #[display("loginModal")]
    Login,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ModalSlot {
    visible: bool,
    message: Option<FormMessage>,
}

/// Visibility and inline message of the signup and login dialogs.
///
/// Both dialogs may be open at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modals {
    signup: ModalSlot,
    login: ModalSlot,
}

impl Modals {
    fn slot(&self, id: ModalId) -> &ModalSlot {
        match id {
            ModalId::Signup => &self.signup,
            ModalId::Login => &self.login,
        }
    }

    fn slot_mut(&mut self, id: ModalId) -> &mut ModalSlot {
        match id {
            ModalId::Signup => &mut self.signup,
            ModalId::Login => &mut self.login,
        }
    }

    /// Shows `id` and clears the messages of both dialogs.
    pub fn open(&mut self, id: ModalId) {
        self.slot_mut(id).visible = true;
        self.signup.message = None;
        self.login.message = None;
    }

    pub fn close(&mut self, id: ModalId) {
        self.slot_mut(id).visible = false;
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.slot(id).visible
    }

    pub fn show_message(&mut self, id: ModalId, message: FormMessage) {
        self.slot_mut(id).message = Some(message);
    }

    pub fn message(&self, id: ModalId) -> Option<&FormMessage> {
        self.slot(id).message.as_ref()
    }
}
