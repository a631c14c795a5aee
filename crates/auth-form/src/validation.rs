//! Client-side credential rules.
//!
//! Rules run in a fixed order and the first one violated wins; the user only
//! ever sees one message per attempt.

use std::fmt;

use shared_types::{FormKind, PasswordField, TokenRequest};

use crate::config::FormVariant;
use crate::error::ValidationError;
use crate::obfuscate;

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_SIGNUP_USERNAME_LEN: usize = 24;

/// Raw field contents as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub username: String,
    pub password: String,
    /// Only the signup form has a confirmation field.
    pub confirm_password: Option<String>,
}

impl FieldValues {
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        FieldValues {
            username: username.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    pub fn signup(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        FieldValues {
            username: username.into(),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
        }
    }
}

/// Credentials that passed validation. Lives for one submit attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Wire payload. The legacy page swaps the password for its checksum.
    pub fn into_request(self, variant: FormVariant) -> TokenRequest {
        let password = if variant.obscures_password() {
            PasswordField::Checksum(obfuscate::checksum(&self.password))
        } else {
            PasswordField::Plain(self.password)
        };
        TokenRequest {
            username: self.username,
            password,
        }
    }
}

/// Length as the page counts it (UTF-16 code units).
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Check the fields of `form` and return the credentials to send.
pub fn validate(
    form: FormKind,
    fields: &FieldValues,
    variant: FormVariant,
) -> Result<Credentials, ValidationError> {
    let password_len = text_len(&fields.password);
    let username_len = text_len(&fields.username);
    let max_password = variant.max_password_len();

    if password_len < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password_len > max_password {
        return Err(ValidationError::PasswordTooLong { max: max_password });
    }
    if username_len < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort {
            min: MIN_USERNAME_LEN,
        });
    }

    if form == FormKind::Signup {
        if username_len > MAX_SIGNUP_USERNAME_LEN {
            return Err(ValidationError::UsernameTooLong {
                max: MAX_SIGNUP_USERNAME_LEN,
            });
        }
        if fields.confirm_password.as_deref() != Some(fields.password.as_str()) {
            return Err(ValidationError::PasswordMismatch);
        }
    }

    if fields.password == fields.username {
        return Err(ValidationError::SameAsUsername);
    }

    Ok(Credentials {
        username: fields.username.clone(),
        password: fields.password.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
        validate(
            FormKind::Login,
            &FieldValues::login(username, password),
            FormVariant::Guided,
        )
    }

    fn signup(username: &str, password: &str, confirm: &str) -> Result<Credentials, ValidationError> {
        validate(
            FormKind::Signup,
            &FieldValues::signup(username, password, confirm),
            FormVariant::Guided,
        )
    }

    #[test]
    fn test_valid_login() {
        let creds = login("player", "secret").unwrap();
        assert_eq!(creds.username, "player");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_short_username() {
        assert_eq!(
            login("ab", "secret").unwrap_err().to_string(),
            "Username must be at least 3 characters long!"
        );
    }

    #[test]
    fn test_password_length_checked_before_username() {
        assert_eq!(
            login("ab", "abc").unwrap_err(),
            ValidationError::PasswordTooShort { min: 4 }
        );
    }

    #[test]
    fn test_password_ceiling_follows_variant() {
        let password = "x".repeat(40);
        assert!(login("player", &password).is_ok());
        let err = validate(
            FormKind::Login,
            &FieldValues::login("player", password.as_str()),
            FormVariant::LegacyRegister,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooLong { max: 32 });

        assert_eq!(
            login("player", &"x".repeat(65)).unwrap_err(),
            ValidationError::PasswordTooLong { max: 64 }
        );
        assert!(login("player", &"x".repeat(64)).is_ok());
    }

    #[test]
    fn test_password_same_as_username_rejected() {
        assert_eq!(
            login("player", "player").unwrap_err(),
            ValidationError::SameAsUsername
        );
        assert_eq!(
            signup("player", "player", "player").unwrap_err(),
            ValidationError::SameAsUsername
        );
    }

    #[test]
    fn test_long_username_only_rejected_on_signup() {
        let username = "u".repeat(25);
        assert!(login(&username, "secret").is_ok());
        assert_eq!(
            signup(&username, "secret", "secret").unwrap_err(),
            ValidationError::UsernameTooLong { max: 24 }
        );
        assert!(signup(&"u".repeat(24), "secret", "secret").is_ok());
    }

    #[test]
    fn test_signup_mismatch() {
        assert_eq!(
            signup("player", "secret", "secreT").unwrap_err(),
            ValidationError::PasswordMismatch
        );
    }

    #[test]
    fn test_mismatch_reported_before_same_as_username() {
        assert_eq!(
            signup("player", "player", "other").unwrap_err(),
            ValidationError::PasswordMismatch
        );
    }

    #[test]
    fn test_first_violated_rule_wins() {
        let long_password = "x".repeat(65);
        let long_username = "u".repeat(25);
        // Each case breaks its own rule and every rule after it that it can.
        let cases = [
            (
                signup("ab", "abc", "zzzz"),
                ValidationError::PasswordTooShort { min: 4 },
            ),
            (
                login("ab", &long_password),
                ValidationError::PasswordTooLong { max: 64 },
            ),
            (
                signup("ab", &long_password, "other"),
                ValidationError::PasswordTooLong { max: 64 },
            ),
            (
                signup("ab", "secret", "other"),
                ValidationError::UsernameTooShort { min: 3 },
            ),
            (
                signup(&long_username, "secret", "other"),
                ValidationError::UsernameTooLong { max: 24 },
            ),
            (
                signup("player", "player", "other"),
                ValidationError::PasswordMismatch,
            ),
            (login("player", "player"), ValidationError::SameAsUsername),
        ];

        for (result, expected) in cases {
            assert_eq!(result.unwrap_err(), expected);
        }
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // Two astral characters are four UTF-16 units.
        assert!(login("player", "\u{1F600}\u{1F600}").is_ok());
        assert_eq!(
            login("player", "\u{1F600}").unwrap_err(),
            ValidationError::PasswordTooShort { min: 4 }
        );
    }

    #[test]
    fn test_legacy_request_carries_checksum() {
        let creds = login("player", "secret").unwrap();
        let request = creds.into_request(FormVariant::LegacyRegister);
        assert_eq!(
            request.password,
            PasswordField::Checksum(obfuscate::checksum("secret"))
        );

        let creds = login("player", "secret").unwrap();
        let request = creds.into_request(FormVariant::Guided);
        assert_eq!(request.password, PasswordField::Plain("secret".to_string()));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = login("player", "secret").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("player"));
        assert!(!debug.contains("secret"));
    }
}
