//! Error Types
//!
//! Validation failures are local and carry no detail beyond which rule
//! failed. API and store errors keep their detail for the log; pages only
//! ever show a localized message derived from them.

use crate::i18n::Message;

/// A form rule that rejected the input before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Login: email or password left empty
    #[error("email and password are required")]
    MissingCredentials,
    #[error("email address is malformed")]
    InvalidEmail,
    /// Registration: name shorter than two characters
    #[error("name is too short")]
    NameTooShort,
    #[error("phone number is malformed")]
    InvalidPhone,
    #[error("password is too short")]
    PasswordTooShort,
    #[error("password confirmation does not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Message shown inline under the form
    pub fn message(self) -> Message {
        match self {
            ValidationError::MissingCredentials => Message::FillAllFields,
            ValidationError::InvalidEmail => Message::InvalidEmail,
            ValidationError::NameTooShort => Message::NameTooShort,
            ValidationError::InvalidPhone => Message::InvalidPhone,
            ValidationError::PasswordTooShort => Message::PasswordTooShort,
            ValidationError::PasswordMismatch => Message::PasswordMismatch,
        }
    }
}

/// Failure talking to the gateway
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response; `message` is the body's `error`/`message` field
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body could not be used
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message, shown verbatim when present
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(msg), .. } => Some(msg),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Failure persisting the session record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to encode session: {0}")]
    Encode(String),
    #[error("failed to write session storage: {0}")]
    Write(String),
}
