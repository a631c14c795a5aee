use std::fmt;

use shared_types::TokenResponse;

/// What the onboarding panel shows after a successful sign-in, and the code
/// it hands to the native client.
#[derive(Clone, PartialEq, Eq)]
pub struct OnboardingContext {
    pub username: String,
    pub authorization_code: String,
    pub account_id: String,
    pub heading: String,
}

impl From<TokenResponse> for OnboardingContext {
    fn from(response: TokenResponse) -> Self {
        OnboardingContext {
            username: response.username,
            authorization_code: response.authorisation_code,
            account_id: response.id,
            heading: response.heading,
        }
    }
}

impl fmt::Debug for OnboardingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingContext")
            .field("username", &self.username)
            .field("authorization_code", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("heading", &self.heading)
            .finish()
    }
}

impl OnboardingContext {
    pub fn welcome_text(&self) -> String {
        format!("Welcome, {}", self.username)
    }

    /// URI that hands the authorization code to the native client.
    pub fn completion_uri(&self, redirect_uri: &str) -> String {
        format!(
            "{}?code={}",
            redirect_uri,
            urlencoding::encode(&self.authorization_code)
        )
    }
}
