use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::error::{AuthError, StoreError};
use crate::storage::KeyValueStore;
use crate::user::{SessionUser, User};

pub const USERS_KEY: &str = "users";
pub const SESSION_KEY: &str = "currentUser";

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trims the way form inputs are trimmed in the browser, which also
/// strips the byte-order mark.
pub(crate) fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length as the browser counts it (UTF-16 code units).
fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Registered users and the current session, persisted through `S`.
#[derive(Clone, Debug, Default)]
pub struct UserStore<S: KeyValueStore> {
    backend: S,
}

impl<S> UserStore<S>
where
    S: KeyValueStore,
{
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Seeds an empty users list if none is stored yet.
    #[instrument(skip(self))]
    pub fn initialize(&self) -> Result<(), StoreError> {
        if !self.backend.contains(USERS_KEY) {
            debug!("seeding empty users list");
            self.backend.set(USERS_KEY, &Vec::<User>::new())?;
        }
        Ok(())
    }

    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.backend.get::<Vec<User>>(USERS_KEY)?.unwrap_or_default())
    }

    #[instrument(skip(self, name, password))]
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = trim_input(name);
        let email = trim_input(email);

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if password_len(password) < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let mut users = self.users()?;
        if users.iter().any(|u| u.email == email) {
            warn!(email = %email, "signup rejected, email taken");
            return Err(AuthError::UserAlreadyExists(email.to_string()));
        }

        let user = User::new(name.to_string(), email.to_string(), password.to_string());
        users.push(user.clone());
        self.backend.set(USERS_KEY, &users)?;

        info!(email = %user.email, total = users.len(), "user registered");
        Ok(user)
    }

    /// Signs in with exact email and password match; the full record
    /// becomes the session.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = trim_input(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let user = self
            .users()?
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        self.backend.set(SESSION_KEY, &user)?;
        info!(email = %user.email, "user signed in");
        Ok(user)
    }

    /// Session for a freshly registered user: name and email only.
    pub fn start_session(&self, user: &SessionUser) -> Result<(), StoreError> {
        self.backend.set(SESSION_KEY, user)?;
        info!(email = %user.email, "session started");
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<SessionUser>, StoreError> {
        self.backend.get(SESSION_KEY)
    }

    pub fn logout(&self) {
        self.backend.delete(SESSION_KEY);
        info!("session cleared");
    }
}
