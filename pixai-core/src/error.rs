use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Backend(String),
    #[error("malformed value under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("User already exists with this email")]
    UserAlreadyExists(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Please enter a description for your image!")]
    EmptyPrompt,
    #[error("Please generate an image first!")]
    NoImage,
    #[error("Please log in to save images!")]
    NotLoggedIn,
}
