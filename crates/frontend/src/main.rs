mod components;
mod page;
mod services;
mod view;

use std::rc::Rc;

use auth_form::{AuthFormController, FormKind, Panel};
use yew::prelude::*;

use crate::components::{login_form::LoginForm, onboarding::Onboarding, signup_form::SignupForm};
use crate::services::{api::ApiService, timer::BrowserTimer};
use crate::view::{FieldRefs, PageState, PageView};

type Controller = AuthFormController<PageView, ApiService, BrowserTimer>;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| page::load_config());
    let state = {
        let panel = config.variant.initial_panel();
        use_reducer(move || PageState::new(panel))
    };
    let fields = use_memo((), |_| FieldRefs::default());

    let controller: Rc<Controller> = {
        let view = PageView::new(state.dispatcher(), (*fields).clone());
        let config = (*config).clone();
        use_memo((), move |_| {
            AuthFormController::new(view, ApiService, BrowserTimer, config)
        })
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            controller.start();
            || ()
        });
    }

    let submit = |form: FormKind| {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = controller.submit(form).await {
                    tracing::debug!(%form, "Submission ended without sign-in: {}", e);
                }
            });
        })
    };

    let switch_to = |panel: Panel| {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            controller.on_link_click(panel);
        })
    };

    let on_complete = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            controller.complete_onboarding();
        })
    };

    html! {
        <div id="app" class="account-portal">
            <LoginForm
                visible={state.panel == Panel::Login}
                ui={state.form(FormKind::Login)}
                links_enabled={state.links_enabled}
                username_ref={fields.login_username.clone()}
                password_ref={fields.login_password.clone()}
                on_submit={submit(FormKind::Login)}
                on_switch={switch_to(Panel::Signup)}
            />
            <SignupForm
                visible={state.panel == Panel::Signup}
                ui={state.form(FormKind::Signup)}
                links_enabled={state.links_enabled}
                username_ref={fields.signup_username.clone()}
                password_ref={fields.signup_password.clone()}
                confirm_password_ref={fields.signup_confirm_password.clone()}
                on_submit={submit(FormKind::Signup)}
                on_switch={switch_to(Panel::Login)}
            />
            <Onboarding
                visible={state.panel == Panel::Onboarding}
                context={state.onboarding.clone()}
                {on_complete}
            />
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    page::mark_scripting_enabled();
    page::detect_webp();

    yew::Renderer::<App>::new().render();
}
