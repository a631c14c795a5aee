use auth_form::OnboardingContext;
use yew::prelude::*;

use super::panel_style;

#[derive(Properties, PartialEq)]
pub struct OnboardingProps {
    pub visible: bool,
    pub context: Option<OnboardingContext>,
    pub on_complete: Callback<()>,
}

#[function_component(Onboarding)]
pub fn onboarding(props: &OnboardingProps) -> Html {
    let on_click = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_complete.emit(());
        })
    };

    let (welcome, id, heading) = match &props.context {
        Some(context) => (
            context.welcome_text(),
            context.account_id.clone(),
            context.heading.clone(),
        ),
        None => Default::default(),
    };

    html! {
        <div class="onboarding-form" style={panel_style(props.visible)}>
            <h2 id="onboarding-heading">{ heading }</h2>
            <p id="welcome">{ welcome }</p>
            <p>{ "Account ID: " }<span id="id">{ id }</span></p>
            <button id="onboarding-button" type="button" onclick={on_click}>
                { "Continue to the game" }
            </button>
        </div>
    }
}
