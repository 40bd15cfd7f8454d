//! Signup and login form handlers.
//!
//! Each submit handler validates, touches the store and writes the inline
//! message. When it succeeds it hands back the user so the caller can run
//! the matching `complete_*` step once the auto-close delay has elapsed.

use tracing::warn;

use crate::auth::UserStore;
use crate::error::{AuthError, StoreError};
use crate::feedback::FormMessage;
use crate::modal::{ModalId, Modals};
use crate::storage::KeyValueStore;
use crate::user::SessionUser;

pub fn submit_signup<S: KeyValueStore>(
    store: &UserStore<S>,
    modals: &mut Modals,
    name: &str,
    email: &str,
    password: &str,
) -> Option<SessionUser> {
    match store.register(name, email, password) {
        Ok(user) => {
            modals.show_message(
                ModalId::Signup,
                FormMessage::success("🎉 Account created successfully! Redirecting..."),
            );
            Some(SessionUser::from(&user))
        }
        Err(err) => {
            report(modals, ModalId::Signup, &err);
            None
        }
    }
}

/// Closes the signup dialog and signs the new user in. Returns the
/// welcome toast text.
pub fn complete_signup<S: KeyValueStore>(
    store: &UserStore<S>,
    modals: &mut Modals,
    user: &SessionUser,
) -> Result<String, StoreError> {
    modals.close(ModalId::Signup);
    store.start_session(user)?;
    Ok(format!("Welcome to PixAI, {}!", user.name))
}

/// On success the session is already written; only closing the dialog
/// waits for the delay.
pub fn submit_login<S: KeyValueStore>(
    store: &UserStore<S>,
    modals: &mut Modals,
    email: &str,
    password: &str,
) -> Option<SessionUser> {
    match store.authenticate(email, password) {
        Ok(user) => {
            modals.show_message(
                ModalId::Login,
                FormMessage::success(format!("✅ Welcome back, {}!", user.name)),
            );
            Some(SessionUser::from(&user))
        }
        Err(err) => {
            report(modals, ModalId::Login, &err);
            None
        }
    }
}

pub fn complete_login(modals: &mut Modals, user: &SessionUser) -> String {
    modals.close(ModalId::Login);
    format!("Great to see you, {}!", user.name)
}

fn report(modals: &mut Modals, id: ModalId, err: &AuthError) {
    let text = match err {
        AuthError::InvalidCredentials => format!("❌ {err}"),
        AuthError::Store(inner) => {
            warn!(modal = %id, error = %inner, "user store unreadable");
            format!("Something went wrong: {inner}")
        }
        _ => err.to_string(),
    };
    modals.show_message(id, FormMessage::error(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::MessageKind;
    use crate::storage::MemoryStore;

    fn setup() -> (UserStore<MemoryStore>, Modals) {
        let store = UserStore::new(MemoryStore::new());
        store.initialize().unwrap();
        (store, Modals::default())
    }

    #[test]
    fn signup_error_is_shown_inline() {
        let (store, mut modals) = setup();
        modals.open(ModalId::Signup);
        assert!(submit_signup(&store, &mut modals, "Ann", "ann@x.com", "123").is_none());
        let message = modals.message(ModalId::Signup).unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Password must be at least 6 characters");
        assert!(modals.is_open(ModalId::Signup));
    }

    #[test]
    fn signup_success_waits_before_signing_in() {
        let (store, mut modals) = setup();
        modals.open(ModalId::Signup);
        let user = submit_signup(&store, &mut modals, "Ann", "ann@x.com", "secret1").unwrap();
        assert_eq!(
            modals.message(ModalId::Signup).unwrap().kind,
            MessageKind::Success
        );
        assert!(store.current_user().unwrap().is_none());

        let toast = complete_signup(&store, &mut modals, &user).unwrap();
        assert_eq!(toast, "Welcome to PixAI, Ann!");
        assert!(!modals.is_open(ModalId::Signup));
        assert_eq!(store.current_user().unwrap(), Some(user));
    }

    #[test]
    fn wrong_password_shows_invalid_credentials() {
        let (store, mut modals) = setup();
        store.register("Ann", "ann@x.com", "secret1").unwrap();
        assert!(submit_login(&store, &mut modals, "ann@x.com", "nope123").is_none());
        assert_eq!(
            modals.message(ModalId::Login).unwrap().text,
            "❌ Invalid email or password"
        );
    }

    #[test]
    fn login_success_signs_in_immediately() {
        let (store, mut modals) = setup();
        store.register("Ann", "ann@x.com", "secret1").unwrap();
        modals.open(ModalId::Login);
        let user = submit_login(&store, &mut modals, "ann@x.com", "secret1").unwrap();
        assert_eq!(
            modals.message(ModalId::Login).unwrap().text,
            "✅ Welcome back, Ann!"
        );
        assert_eq!(store.current_user().unwrap(), Some(user.clone()));

        assert_eq!(complete_login(&mut modals, &user), "Great to see you, Ann!");
        assert!(!modals.is_open(ModalId::Login));
    }
}
