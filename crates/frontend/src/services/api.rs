use async_trait::async_trait;
use auth_form::{AuthTransport, OutgoingRequest, TransportError, TransportResponse};
use gloo_net::http::Request;
use web_sys::AbortController;

/// Posts token requests with `fetch`.
pub struct ApiService;

/// Aborts the fetch if the request future is dropped before it finishes.
struct AbortOnDrop {
    controller: Option<AbortController>,
}

impl AbortOnDrop {
    fn disarm(&mut self) {
        self.controller = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            tracing::debug!("Aborting token request");
            controller.abort();
        }
    }
}

#[async_trait(?Send)]
impl AuthTransport for ApiService {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError> {
        let controller = AbortController::new()
            .map_err(|e| TransportError(format!("Failed to create abort controller: {:?}", e)))?;
        let signal = controller.signal();
        let mut guard = AbortOnDrop {
            controller: Some(controller),
        };

        let mut builder = Request::post(&request.url).abort_signal(Some(&signal));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .body(request.body)
            .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        guard.disarm();
        Ok(TransportResponse {
            status,
            status_text,
            body,
        })
    }
}
