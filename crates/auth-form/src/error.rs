//! Error types for the auth form.
//!
//! Every failure a submission can end in is a [`SubmitError`]. Each one maps
//! to the blocking message the user sees through [`SubmitError::user_message`];
//! an aborted request maps to none, because whoever aborted it has already
//! told the user why.

use shared_types::ErrorResponse;
use thiserror::Error;

use crate::config::FormVariant;

/// A credentials rule the form fields failed. The display text is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password must be at least {min} characters long!")]
    PasswordTooShort { min: usize },

    #[error("Password must be less than {max} characters long!")]
    PasswordTooLong { max: usize },

    #[error("Username must be at least {min} characters long!")]
    UsernameTooShort { min: usize },

    #[error("Username must be less than {max} characters long!")]
    UsernameTooLong { max: usize },

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Password cannot be the same as your username!")]
    SameAsUsername,
}

/// Why a submission did not reach onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form already has a submission in progress, or has completed
    #[error("form is busy")]
    Busy,

    #[error("Invalid credentials: {0}")]
    Validation(#[from] ValidationError),

    /// No response within the request timeout
    #[error("Request timed out")]
    TimedOut,

    /// Cancelled through the request's abort handle
    #[error("Request aborted")]
    Aborted,

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-200 response with a decodable error payload
    #[error("Server rejected the request ({status}): {}", .error.error_message)]
    Server { status: u16, error: ErrorResponse },

    /// 200 response whose body is not a token payload
    #[error("Malformed token response: {0}")]
    MalformedToken(String),

    /// Non-200 response whose body is not an error payload
    #[error("Malformed error response ({status} {status_text})")]
    MalformedError {
        status: u16,
        status_text: String,
        body: String,
    },
}

impl SubmitError {
    /// The message shown to the user, or `None` when nothing should be shown.
    pub fn user_message(&self, variant: FormVariant) -> Option<String> {
        match self {
            SubmitError::Busy | SubmitError::Aborted => None,
            SubmitError::Validation(e) => Some(e.to_string()),
            SubmitError::TimedOut => Some("Request timed out. Please try again later.".to_string()),
            SubmitError::Transport(e) => {
                Some(format!("An error occurred when logging in!\n\n{}", e))
            }
            SubmitError::Server { error, .. } => Some(if variant.shows_error_code() {
                format!(
                    "An error occurred when logging in!\n\nError Info:\n{}\n{}",
                    error.error_code.as_deref().unwrap_or("undefined"),
                    error.error_message
                )
            } else {
                format!("An error occurred when logging in!\n\n{}", error.error_message)
            }),
            SubmitError::MalformedToken(_) => Some(
                "An error occurred when trying to log in!\n\nSomething went wrong when redirecting... Please try again later."
                    .to_string(),
            ),
            SubmitError::MalformedError {
                status,
                status_text,
                body,
            } => Some(format!(
                "An error occurred when trying to login!\n\nError Info:\n{} {}\n{}",
                status, status_text, body
            )),
        }
    }
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
