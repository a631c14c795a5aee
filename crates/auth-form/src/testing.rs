//! In-memory stand-ins for the page, the network and the clock.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use shared_types::{ErrorResponse, FormKind, TokenResponse};

use crate::onboarding::OnboardingContext;
use crate::panel::Panel;
use crate::transport::{AuthTransport, OutgoingRequest, Timer, TransportError, TransportResponse};
use crate::validation::FieldValues;
use crate::view::FormView;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Panel(Panel),
    FormEnabled(FormKind, bool),
    Busy(FormKind, bool),
    Links(bool),
    Message(String),
    Onboarding(OnboardingContext),
    Navigate(String),
}

/// Records every call the controller makes.
#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
    fields: RefCell<HashMap<FormKind, FieldValues>>,
}

impl RecordingView {
    pub const PAGE_URL: &'static str = "https://portal.test/id/login";

    pub fn set_fields(&self, form: FormKind, values: FieldValues) {
        self.fields.borrow_mut().insert(form, values);
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Message(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn panels(&self) -> Vec<Panel> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Panel(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn last_busy(&self, form: FormKind) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Busy(f, busy) if *f == form => Some(*busy),
            _ => None,
        })
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl FormView for RecordingView {
    fn show_panel(&self, panel: Panel) {
        self.record(ViewEvent::Panel(panel));
    }

    fn field_values(&self, form: FormKind) -> FieldValues {
        self.fields
            .borrow()
            .get(&form)
            .cloned()
            .unwrap_or_default()
    }

    fn set_form_enabled(&self, form: FormKind, enabled: bool) {
        self.record(ViewEvent::FormEnabled(form, enabled));
    }

    fn set_busy(&self, form: FormKind, busy: bool) {
        self.record(ViewEvent::Busy(form, busy));
    }

    fn set_links_enabled(&self, enabled: bool) {
        self.record(ViewEvent::Links(enabled));
    }

    fn show_message(&self, message: &str) {
        self.record(ViewEvent::Message(message.to_string()));
    }

    fn show_onboarding(&self, context: &OnboardingContext) {
        self.record(ViewEvent::Onboarding(context.clone()));
    }

    fn navigate(&self, uri: &str) {
        self.record(ViewEvent::Navigate(uri.to_string()));
    }

    fn page_url(&self) -> String {
        Self::PAGE_URL.to_string()
    }
}

/// One canned answer from the server.
pub struct Reply {
    delay: Duration,
    result: Result<TransportResponse, TransportError>,
}

impl Reply {
    pub fn after(delay: Duration, status: u16, body: String) -> Self {
        let status_text = match status {
            200 => "OK",
            400 => "Bad Request",
            401 => "Unauthorized",
            500 => "Internal Server Error",
            _ => "",
        };
        Reply {
            delay,
            result: Ok(TransportResponse {
                status,
                status_text: status_text.to_string(),
                body,
            }),
        }
    }

    pub fn failure(message: &str) -> Self {
        Reply {
            delay: Duration::ZERO,
            result: Err(TransportError(message.to_string())),
        }
    }
}

pub fn ok_token_body(username: &str, code: &str, id: &str, heading: &str) -> String {
    serde_json::to_string(&TokenResponse {
        username: username.to_string(),
        authorisation_code: code.to_string(),
        id: id.to_string(),
        heading: heading.to_string(),
    })
    .unwrap()
}

pub fn error_body(code: Option<&str>, message: &str) -> String {
    serde_json::to_string(&ErrorResponse {
        error_code: code.map(str::to_string),
        error_message: message.to_string(),
    })
    .unwrap()
}

/// Answers requests from a queue, each after its own delay.
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<OutgoingRequest>>,
    cancelled: Cell<usize>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        ScriptedTransport {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
            cancelled: Cell::new(0),
        }
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.borrow().clone()
    }

    /// Requests dropped before their reply was delivered.
    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }
}

struct CancelGuard<'a> {
    counter: &'a Cell<usize>,
    armed: bool,
}

impl Drop for CancelGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.counter.set(self.counter.get() + 1);
        }
    }
}

#[async_trait(?Send)]
impl AuthTransport for ScriptedTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .expect("no scripted reply left");

        let mut guard = CancelGuard {
            counter: &self.cancelled,
            armed: true,
        };
        tokio::time::sleep(reply.delay).await;
        guard.armed = false;
        reply.result
    }
}

/// Tokio clock; pair with `start_paused` for deterministic timing.
pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
