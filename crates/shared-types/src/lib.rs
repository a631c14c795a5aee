//! Wire types for the account portal's login endpoint.
//!
//! These mirror the JSON documents exchanged with `POST /id/login/token`.
//! Field names follow the server's camelCase spelling.

use serde::{Deserialize, Serialize};

/// Default path of the token endpoint.
pub const TOKEN_ENDPOINT: &str = "/id/login/token";

/// Header names sent with every token request.
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const REQUESTED_WITH: &str = "X-Requested-With";
    pub const REQUEST_SOURCE: &str = "X-Request-Source";
    pub const REQUEST_SOURCE_URL: &str = "X-Request-Source-Url";
    pub const REQUEST_SOURCE_FORM: &str = "X-Request-Source-Form";

    pub const JSON: &str = "application/json";
    pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
}

/// The form a submission originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    /// Value of the `X-Request-Source-Form` header. The server branches on it.
    pub fn source_form(self) -> &'static str {
        match self {
            FormKind::Login => "login-form",
            FormKind::Signup => "signup-form",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source_form())
    }
}

/// Password as it travels on the wire.
///
/// Older pages sent a 32-bit checksum of the password as a JSON number
/// instead of the string itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PasswordField {
    Plain(String),
    Checksum(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: PasswordField,
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub username: String,
    pub authorisation_code: String,
    /// Account id
    pub id: String,
    pub heading: String,
}

/// Body of a non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub error_message: String,
}
