use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::panel::Panel;

/// Which generation of the login page the controller behaves like.
///
/// The two pages disagree on the password ceiling, on how the password is
/// sent and on the error payload they expect back. `Guided` is current;
/// `LegacyRegister` is kept for the old registration page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    #[default]
    Guided,
    LegacyRegister,
}

impl FormVariant {
    pub fn max_password_len(self) -> usize {
        match self {
            FormVariant::Guided => 64,
            FormVariant::LegacyRegister => 32,
        }
    }

    /// Whether the password is replaced by its checksum before sending.
    pub fn obscures_password(self) -> bool {
        matches!(self, FormVariant::LegacyRegister)
    }

    /// Whether server errors are shown with their `errorCode`.
    pub fn shows_error_code(self) -> bool {
        matches!(self, FormVariant::LegacyRegister)
    }

    pub fn initial_panel(self) -> Panel {
        match self {
            FormVariant::Guided => Panel::Login,
            FormVariant::LegacyRegister => Panel::Signup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Token endpoint the credentials are posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Client id half of the shared-secret `Authorization` header
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Client secret half of the shared-secret `Authorization` header
    #[serde(default = "default_client_secret")]
    pub client_secret: String,

    /// Value of the `X-Request-Source` header
    #[serde(default = "default_request_source")]
    pub request_source: String,

    /// URI the authorization code is handed to on completion
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,

    /// Pause before validating so the busy indicator is visible (milliseconds)
    #[serde(default = "default_validation_delay")]
    pub validation_delay_ms: u64,

    /// Give up on the token request after this long (milliseconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default)]
    pub variant: FormVariant,
}

fn default_endpoint() -> String {
    shared_types::TOKEN_ENDPOINT.to_string()
}

fn default_client_id() -> String {
    "ec0ebb7e56f6454e86c62299a7b32e21".to_string()
}

fn default_client_secret() -> String {
    "bbprivateserverinmemoryofdippy<3".to_string()
}

fn default_request_source() -> String {
    "login-script.js".to_string()
}

fn default_redirect_uri() -> String {
    "com.epicgames.wex://authorize/".to_string()
}

fn default_validation_delay() -> u64 {
    1000 // 1 second
}

fn default_request_timeout() -> u64 {
    10_000 // 10 seconds
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            endpoint: default_endpoint(),
            client_id: default_client_id(),
            client_secret: default_client_secret(),
            request_source: default_request_source(),
            redirect_uri: default_redirect_uri(),
            validation_delay_ms: default_validation_delay(),
            request_timeout_ms: default_request_timeout(),
            variant: FormVariant::default(),
        }
    }
}

impl FormConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".to_string()));
        }
        if self.redirect_uri.trim().is_empty() {
            return Err(ConfigError::Invalid("redirect_uri must not be empty".to_string()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        format!("basic {}", STANDARD.encode(credentials))
    }

    pub fn validation_delay(&self) -> Duration {
        Duration::from_millis(self.validation_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
