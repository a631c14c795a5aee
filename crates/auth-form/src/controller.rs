//! The auth form state machine.
//!
//! A submission moves a form through `Idle -> Validating -> InFlight` and
//! either back to `Idle` (any failure) or on to `Settled` (signed in). While
//! a form is not `Idle` its inputs are disabled, so it can never have two
//! requests outstanding. Panel-switch links are refused while any submission
//! is running and after sign-in.

use std::cell::{Cell, RefCell};

use futures::future::{self, AbortHandle, Abortable, Aborted, Either};
use shared_types::{ErrorResponse, FormKind, TokenResponse};
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::onboarding::OnboardingContext;
use crate::panel::Panel;
use crate::transport::{AuthTransport, OutgoingRequest, Timer, TransportResponse};
use crate::validation;
use crate::view::FormView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    InFlight,
    /// Signed in; the form is done for good.
    Settled,
}

#[derive(Default)]
struct FormSlot {
    state: Cell<SubmissionState>,
    abort: RefCell<Option<AbortHandle>>,
}

pub struct AuthFormController<V, T, C> {
    view: V,
    transport: T,
    timer: C,
    config: FormConfig,
    panel: Cell<Panel>,
    links_enabled: Cell<bool>,
    login: FormSlot,
    signup: FormSlot,
    onboarding: RefCell<Option<OnboardingContext>>,
}

impl<V, T, C> AuthFormController<V, T, C>
where
    V: FormView,
    T: AuthTransport,
    C: Timer,
{
    pub fn new(view: V, transport: T, timer: C, config: FormConfig) -> Self {
        let panel = config.variant.initial_panel();
        AuthFormController {
            view,
            transport,
            timer,
            config,
            panel: Cell::new(panel),
            links_enabled: Cell::new(false),
            login: FormSlot::default(),
            signup: FormSlot::default(),
            onboarding: RefCell::new(None),
        }
    }

    /// Put the page into its initial state: the configured panel visible,
    /// both forms usable, links live.
    pub fn start(&self) {
        let panel = self.config.variant.initial_panel();
        debug!(?panel, variant = ?self.config.variant, "Starting auth form");
        self.show_panel(panel);
        for form in [FormKind::Login, FormKind::Signup] {
            self.view.set_form_enabled(form, true);
            self.view.set_busy(form, false);
        }
        self.set_links(true);
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn panel(&self) -> Panel {
        self.panel.get()
    }

    pub fn state(&self, form: FormKind) -> SubmissionState {
        self.slot(form).state.get()
    }

    pub fn links_enabled(&self) -> bool {
        self.links_enabled.get()
    }

    pub fn onboarding(&self) -> Option<OnboardingContext> {
        self.onboarding.borrow().clone()
    }

    /// Make `panel` the only visible panel.
    pub fn show_panel(&self, panel: Panel) {
        self.panel.set(panel);
        self.view.show_panel(panel);
    }

    /// A login/signup link was clicked. Returns whether the panel changed.
    ///
    /// The caller suppresses the link's own navigation regardless.
    pub fn on_link_click(&self, target: Panel) -> bool {
        if !self.links_enabled.get() || !target.is_linkable() {
            debug!(?target, "Ignoring panel link while form is busy");
            return false;
        }
        self.show_panel(target);
        true
    }

    /// Run one submission of `form` to completion.
    ///
    /// Every outcome other than `Busy` has already been shown to the user
    /// when this returns.
    pub async fn submit(&self, form: FormKind) -> Result<OnboardingContext, SubmitError> {
        let state = self.slot(form).state.get();
        if state != SubmissionState::Idle {
            debug!(%form, ?state, "Ignoring submit, form is not idle");
            return Err(SubmitError::Busy);
        }

        self.begin(form);
        let result = self.run(form).await;
        match &result {
            Ok(context) => self.succeed(form, context),
            Err(error) => self.fail(form, error),
        }
        result
    }

    /// Abort the form's in-flight request. The submission ends without a
    /// message. Returns whether there was anything to abort.
    pub fn cancel(&self, form: FormKind) -> bool {
        match self.slot(form).abort.borrow().as_ref() {
            Some(handle) => {
                info!(%form, "Cancelling token request");
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Hand the authorization code to the native client. Only possible once
    /// signed in.
    pub fn complete_onboarding(&self) -> bool {
        let onboarding = self.onboarding.borrow();
        let Some(context) = onboarding.as_ref() else {
            debug!("Onboarding completion requested before sign-in");
            return false;
        };
        info!(account_id = %context.account_id, "Completing onboarding");
        self.view
            .navigate(&context.completion_uri(&self.config.redirect_uri));
        true
    }

    fn slot(&self, form: FormKind) -> &FormSlot {
        match form {
            FormKind::Login => &self.login,
            FormKind::Signup => &self.signup,
        }
    }

    fn set_links(&self, enabled: bool) {
        if self.links_enabled.replace(enabled) != enabled {
            self.view.set_links_enabled(enabled);
        }
    }

    fn begin(&self, form: FormKind) {
        debug!(%form, "Submission started");
        self.slot(form).state.set(SubmissionState::Validating);
        self.view.set_form_enabled(form, false);
        self.view.set_busy(form, true);
        self.set_links(false);
    }

    async fn run(&self, form: FormKind) -> Result<OnboardingContext, SubmitError> {
        self.timer.sleep(self.config.validation_delay()).await;

        let fields = self.view.field_values(form);
        let credentials = validation::validate(form, &fields, self.config.variant)?;

        self.slot(form).state.set(SubmissionState::InFlight);
        let payload = credentials.into_request(self.config.variant);
        let request = OutgoingRequest::token(&self.config, form, self.view.page_url(), &payload)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let response = self.send_with_timeout(form, request).await?;
        decode(response)
    }

    /// Race the request against the timeout. Whichever loses is dropped:
    /// the timer is cleared on a response, the request is aborted on timeout.
    async fn send_with_timeout(
        &self,
        form: FormKind,
        request: OutgoingRequest,
    ) -> Result<TransportResponse, SubmitError> {
        let slot = self.slot(form);
        let (handle, registration) = AbortHandle::new_pair();
        *slot.abort.borrow_mut() = Some(handle.clone());

        debug!(%form, url = %request.url, "Sending token request");
        let send = Abortable::new(self.transport.send(request), registration);
        let timeout = self.timer.sleep(self.config.request_timeout());

        let outcome = match future::select(send, timeout).await {
            Either::Left((Ok(result), _timer)) => {
                result.map_err(|e| SubmitError::Transport(e.to_string()))
            }
            Either::Left((Err(Aborted), _timer)) => Err(SubmitError::Aborted),
            Either::Right(((), pending)) => {
                handle.abort();
                drop(pending);
                Err(SubmitError::TimedOut)
            }
        };

        slot.abort.borrow_mut().take();
        outcome
    }

    fn succeed(&self, form: FormKind, context: &OnboardingContext) {
        info!(%form, account_id = %context.account_id, "Signed in");
        self.slot(form).state.set(SubmissionState::Settled);
        *self.onboarding.borrow_mut() = Some(context.clone());
        self.view.set_busy(form, false);
        self.view.show_onboarding(context);
        self.show_panel(Panel::Onboarding);
    }

    fn fail(&self, form: FormKind, error: &SubmitError) {
        match error {
            SubmitError::Validation(e) => debug!(%form, "Rejected by validation: {}", e),
            SubmitError::Aborted => info!(%form, "Token request aborted"),
            other => warn!(%form, "Submission failed: {}", other),
        }

        self.slot(form).state.set(SubmissionState::Idle);
        self.view.set_busy(form, false);
        if let Some(message) = error.user_message(self.config.variant) {
            self.view.show_message(&message);
        }
        self.view.set_form_enabled(form, true);

        let others_idle = [FormKind::Login, FormKind::Signup]
            .into_iter()
            .all(|f| self.slot(f).state.get() == SubmissionState::Idle);
        if others_idle && self.onboarding.borrow().is_none() {
            self.set_links(true);
        }
    }
}

fn decode(response: TransportResponse) -> Result<OnboardingContext, SubmitError> {
    if response.is_success() {
        return serde_json::from_str::<TokenResponse>(&response.body)
            .map(OnboardingContext::from)
            .map_err(|e| SubmitError::MalformedToken(e.to_string()));
    }

    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(error) => Err(SubmitError::Server {
            status: response.status,
            error,
        }),
        Err(_) => Err(SubmitError::MalformedError {
            status: response.status,
            status_text: response.status_text,
            body: response.body,
        }),
    }
}
