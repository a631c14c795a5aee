//! HTTP and clock seams.

use std::time::Duration;

use async_trait::async_trait;
use shared_types::{headers, FormKind, TokenRequest};
use thiserror::Error;

use crate::config::FormConfig;

/// A fully built token request, ready for whatever HTTP client the page has.
#[derive(Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON text
    pub body: String,
}

impl std::fmt::Debug for OutgoingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Body and Authorization carry secrets.
        f.debug_struct("OutgoingRequest")
            .field("url", &self.url)
            .field("headers", &self.headers.len())
            .finish_non_exhaustive()
    }
}

impl OutgoingRequest {
    pub fn token(
        config: &FormConfig,
        form: FormKind,
        page_url: String,
        payload: &TokenRequest,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        Ok(OutgoingRequest {
            url: config.endpoint.clone(),
            headers: vec![
                (headers::CONTENT_TYPE, headers::JSON.to_string()),
                (headers::ACCEPT, headers::JSON.to_string()),
                (headers::AUTHORIZATION, config.authorization_header()),
                (headers::REQUESTED_WITH, headers::XML_HTTP_REQUEST.to_string()),
                (headers::REQUEST_SOURCE, config.request_source.clone()),
                (headers::REQUEST_SOURCE_URL, page_url),
                (headers::REQUEST_SOURCE_FORM, form.source_form().to_string()),
            ],
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Whatever came back, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// The request failed before a response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one token request.
///
/// Dropping the returned future must cancel the underlying request.
#[async_trait(?Send)]
pub trait AuthTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError>;
}

/// Wall-clock delays. Dropping a pending sleep clears the timer.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}
