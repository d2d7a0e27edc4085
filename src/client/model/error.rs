use thiserror::Error;

/// Client-side validation failures. Never sent to the backend.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ValidationError {
    #[error("New password and confirmation do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a whole number")]
    InvalidInteger(&'static str),
    #[error("{0} must be a number")]
    InvalidDecimal(&'static str),
    #[error("{0} must be a date (YYYY-MM-DD)")]
    InvalidDate(&'static str),
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ClientError {
    /// Credentials rejected, or no profile could be fetched after login.
    #[error("{0}")]
    Auth(String),
    /// The backend answered 401; the session has already been torn down.
    #[error("Session expired, please log in again")]
    Unauthorized,
    /// Any other non-2xx answer.
    #[error("{message}")]
    Request { status: u16, message: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
