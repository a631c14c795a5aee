use yew::prelude::*;

use super::{link_callback, link_class, panel_style, spinner_class, submit_callback};
use crate::view::FormUi;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub visible: bool,
    pub ui: FormUi,
    pub links_enabled: bool,
    pub username_ref: NodeRef,
    pub password_ref: NodeRef,
    pub on_submit: Callback<()>,
    /// Switch to the signup panel
    pub on_switch: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let disabled = !props.ui.enabled;

    html! {
        <div class="login-form" style={panel_style(props.visible)}>
            <h2>{ "Log in" }</h2>
            <form id="login-form" onsubmit={submit_callback(&props.on_submit)}>
                <label for="login-name">{ "Username or account ID" }</label>
                <input
                    id="login-name"
                    type="text"
                    autocomplete="username"
                    ref={props.username_ref.clone()}
                    {disabled}
                />
                <label for="login-password">{ "Password" }</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    ref={props.password_ref.clone()}
                    {disabled}
                />
                <button id="login-button" type="submit" {disabled}>{ "Log in" }</button>
                <div id="login-spinner" class={spinner_class(props.ui.busy)}></div>
            </form>
            <p>
                { "Don't have an account? " }
                <a
                    href="#"
                    class={link_class("signup-link", props.links_enabled)}
                    onclick={link_callback(&props.on_switch)}
                >
                    { "Sign up" }
                </a>
            </p>
        </div>
    }
}
