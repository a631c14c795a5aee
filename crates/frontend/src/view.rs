//! Page state and the controller's view of it.

use std::rc::Rc;

use auth_form::{FieldValues, FormKind, FormView, OnboardingContext, Panel};
use gloo::timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormUi {
    pub enabled: bool,
    pub busy: bool,
}

impl Default for FormUi {
    fn default() -> Self {
        FormUi {
            enabled: true,
            busy: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub panel: Panel,
    pub login: FormUi,
    pub signup: FormUi,
    pub links_enabled: bool,
    pub onboarding: Option<OnboardingContext>,
}

impl PageState {
    pub fn new(panel: Panel) -> Self {
        PageState {
            panel,
            login: FormUi::default(),
            signup: FormUi::default(),
            links_enabled: true,
            onboarding: None,
        }
    }

    pub fn form(&self, form: FormKind) -> FormUi {
        match form {
            FormKind::Login => self.login,
            FormKind::Signup => self.signup,
        }
    }

    fn form_mut(&mut self, form: FormKind) -> &mut FormUi {
        match form {
            FormKind::Login => &mut self.login,
            FormKind::Signup => &mut self.signup,
        }
    }
}

pub enum PageAction {
    ShowPanel(Panel),
    SetFormEnabled(FormKind, bool),
    SetBusy(FormKind, bool),
    SetLinksEnabled(bool),
    ShowOnboarding(OnboardingContext),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::ShowPanel(panel) => next.panel = panel,
            PageAction::SetFormEnabled(form, enabled) => next.form_mut(form).enabled = enabled,
            PageAction::SetBusy(form, busy) => next.form_mut(form).busy = busy,
            PageAction::SetLinksEnabled(enabled) => next.links_enabled = enabled,
            PageAction::ShowOnboarding(context) => next.onboarding = Some(context),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Input elements the controller reads credentials from.
#[derive(Clone, Default, PartialEq)]
pub struct FieldRefs {
    pub login_username: NodeRef,
    pub login_password: NodeRef,
    pub signup_username: NodeRef,
    pub signup_password: NodeRef,
    pub signup_confirm_password: NodeRef,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Drives the page through its reducer; reads fields straight from the DOM.
pub struct PageView {
    dispatcher: UseReducerDispatcher<PageState>,
    fields: FieldRefs,
}

impl PageView {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>, fields: FieldRefs) -> Self {
        PageView { dispatcher, fields }
    }
}

impl FormView for PageView {
    fn show_panel(&self, panel: Panel) {
        self.dispatcher.dispatch(PageAction::ShowPanel(panel));
    }

    fn field_values(&self, form: FormKind) -> FieldValues {
        match form {
            FormKind::Login => FieldValues::login(
                input_value(&self.fields.login_username),
                input_value(&self.fields.login_password),
            ),
            FormKind::Signup => FieldValues::signup(
                input_value(&self.fields.signup_username),
                input_value(&self.fields.signup_password),
                input_value(&self.fields.signup_confirm_password),
            ),
        }
    }

    fn set_form_enabled(&self, form: FormKind, enabled: bool) {
        self.dispatcher
            .dispatch(PageAction::SetFormEnabled(form, enabled));
    }

    fn set_busy(&self, form: FormKind, busy: bool) {
        self.dispatcher.dispatch(PageAction::SetBusy(form, busy));
    }

    fn set_links_enabled(&self, enabled: bool) {
        self.dispatcher
            .dispatch(PageAction::SetLinksEnabled(enabled));
    }

    fn show_message(&self, message: &str) {
        // alert() blocks rendering; let the spinner clear first.
        let message = message.to_string();
        Timeout::new(1, move || gloo::dialogs::alert(&message)).forget();
    }

    fn show_onboarding(&self, context: &OnboardingContext) {
        self.dispatcher
            .dispatch(PageAction::ShowOnboarding(context.clone()));
    }

    fn navigate(&self, uri: &str) {
        if let Err(e) = gloo::utils::window().location().set_href(uri) {
            tracing::error!("Failed to navigate to completion URI: {:?}", e);
        }
    }

    fn page_url(&self) -> String {
        gloo::utils::window()
            .location()
            .href()
            .unwrap_or_default()
    }
}
