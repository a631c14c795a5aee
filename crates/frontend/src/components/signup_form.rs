use yew::prelude::*;

use super::{link_callback, link_class, panel_style, spinner_class, submit_callback};
use crate::view::FormUi;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub visible: bool,
    pub ui: FormUi,
    pub links_enabled: bool,
    pub username_ref: NodeRef,
    pub password_ref: NodeRef,
    pub confirm_password_ref: NodeRef,
    pub on_submit: Callback<()>,
    /// Switch to the login panel
    pub on_switch: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let disabled = !props.ui.enabled;

    html! {
        <div class="signup-form" style={panel_style(props.visible)}>
            <h2>{ "Sign up" }</h2>
            <form id="signup-form" onsubmit={submit_callback(&props.on_submit)}>
                <label for="signup-username">{ "Username" }</label>
                <input
                    id="signup-username"
                    type="text"
                    autocomplete="username"
                    ref={props.username_ref.clone()}
                    {disabled}
                />
                <label for="signup-password">{ "Password" }</label>
                <input
                    id="signup-password"
                    type="password"
                    autocomplete="new-password"
                    ref={props.password_ref.clone()}
                    {disabled}
                />
                <label for="signup-confirm-password">{ "Confirm password" }</label>
                <input
                    id="signup-confirm-password"
                    type="password"
                    autocomplete="new-password"
                    ref={props.confirm_password_ref.clone()}
                    {disabled}
                />
                <button id="signup-button" type="submit" {disabled}>{ "Sign up" }</button>
                <div id="signup-spinner" class={spinner_class(props.ui.busy)}></div>
            </form>
            <p>
                { "Already have an account? " }
                <a
                    href="#"
                    class={link_class("login-link", props.links_enabled)}
                    onclick={link_callback(&props.on_switch)}
                >
                    { "Log in" }
                </a>
            </p>
        </div>
    }
}
